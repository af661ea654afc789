/// Ranking, deduplication and the named score views
use serde::Serialize;
use std::collections::HashSet;

use super::types::{ScoredPool, SourceScope};

pub const TOP_LIMIT: usize = 10;
pub const ALL_TOP_LIMIT: usize = 20;
pub const CATEGORY_LIMIT: usize = 15;
pub const HIGH_APR_LIMIT: usize = 20;
/// Percent
pub const HIGH_APR_THRESHOLD: f64 = 30.0;
pub const LOW_RISK_MAX_VOLATILITY: f64 = 0.5;
pub const LOW_RISK_MIN_TVL: f64 = 30_000.0;

/// Name markers of USD-pegged assets
const USD_MARKERS: &[&str] = &["usdc", "usdt", "usd", "usd1"];
/// Name markers of stable pools (USD markers plus "stable")
const STABLE_MARKERS: &[&str] = &["usdc", "usdt", "usd", "usd1", "stable"];

/// Sort by score (descending, stable for ties) and keep the first entry per address
pub fn rank_and_dedupe(mut pools: Vec<ScoredPool>) -> Vec<ScoredPool> {
    pools.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen = HashSet::new();
    pools.retain(|p| seen.insert(p.pool.pool_address.clone()));
    pools
}

fn name_contains_any(pool: &ScoredPool, markers: &[&str]) -> bool {
    let name = pool.pool.name.to_lowercase();
    markers.iter().any(|m| name.contains(m))
}

pub fn top(ranked: &[ScoredPool], limit: usize) -> Vec<ScoredPool> {
    ranked.iter().take(limit).cloned().collect()
}

pub fn best_stables(ranked: &[ScoredPool]) -> Vec<ScoredPool> {
    ranked
        .iter()
        .filter(|p| name_contains_any(p, STABLE_MARKERS))
        .take(CATEGORY_LIMIT)
        .cloned()
        .collect()
}

/// Pools without a USD marker; "stable" alone does not exclude a pool
pub fn best_volatile(ranked: &[ScoredPool]) -> Vec<ScoredPool> {
    ranked
        .iter()
        .filter(|p| !name_contains_any(p, USD_MARKERS))
        .take(CATEGORY_LIMIT)
        .cloned()
        .collect()
}

pub fn high_apr(ranked: &[ScoredPool]) -> Vec<ScoredPool> {
    let mut pools: Vec<ScoredPool> = ranked
        .iter()
        .filter(|p| p.pool.apr >= HIGH_APR_THRESHOLD)
        .cloned()
        .collect();
    pools.sort_by(|a, b| b.pool.apr.total_cmp(&a.pool.apr));
    pools.truncate(HIGH_APR_LIMIT);
    pools
}

pub fn low_risk(ranked: &[ScoredPool]) -> Vec<ScoredPool> {
    ranked
        .iter()
        .filter(|p| {
            name_contains_any(p, USD_MARKERS)
                && p.pool.volatility.abs() < LOW_RISK_MAX_VOLATILITY
                && p.pool.tvl > LOW_RISK_MIN_TVL
        })
        .take(CATEGORY_LIMIT)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AllScoresResponse {
    pub count: usize,
    pub top: Vec<ScoredPool>,
    pub all: Vec<ScoredPool>,
}

pub fn all_scores(ranked: Vec<ScoredPool>) -> AllScoresResponse {
    AllScoresResponse {
        count: ranked.len(),
        top: top(&ranked, ALL_TOP_LIMIT),
        all: ranked,
    }
}

// =============================================================================
// NAMED VIEWS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreView {
    Top10,
    TopNamed,
    All,
    BestStables,
    BestVolatile,
    HighApr,
    LowRisk,
}

impl ScoreView {
    pub const ALL_VIEWS: [ScoreView; 7] = [
        ScoreView::Top10,
        ScoreView::TopNamed,
        ScoreView::All,
        ScoreView::BestStables,
        ScoreView::BestVolatile,
        ScoreView::HighApr,
        ScoreView::LowRisk,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ScoreView::Top10 => "top10",
            ScoreView::TopNamed => "top-named",
            ScoreView::All => "all",
            ScoreView::BestStables => "best-stables",
            ScoreView::BestVolatile => "best-volatile",
            ScoreView::HighApr => "high-apr",
            ScoreView::LowRisk => "low-risk",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL_VIEWS.into_iter().find(|v| v.slug() == slug)
    }

    /// `top-named` and `all` rank every source; the other views rank GeckoTerminal listings only
    pub fn scope(&self) -> SourceScope {
        match self {
            ScoreView::TopNamed | ScoreView::All => SourceScope::All,
            _ => SourceScope::GeckoTerminal,
        }
    }

    pub fn apply(&self, ranked: Vec<ScoredPool>) -> ViewResult {
        match self {
            ScoreView::Top10 | ScoreView::TopNamed => ViewResult::Pools(top(&ranked, TOP_LIMIT)),
            ScoreView::All => ViewResult::All(all_scores(ranked)),
            ScoreView::BestStables => ViewResult::Pools(best_stables(&ranked)),
            ScoreView::BestVolatile => ViewResult::Pools(best_volatile(&ranked)),
            ScoreView::HighApr => ViewResult::Pools(high_apr(&ranked)),
            ScoreView::LowRisk => ViewResult::Pools(low_risk(&ranked)),
        }
    }
}

/// Output of a view: a plain list, or the `{count, top, all}` envelope
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ViewResult {
    Pools(Vec<ScoredPool>),
    All(AllScoresResponse),
}

impl ViewResult {
    /// Pools a caller should display (the `top` slice for the envelope)
    pub fn pools(&self) -> &[ScoredPool] {
        match self {
            ViewResult::Pools(pools) => pools,
            ViewResult::All(all) => &all.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::types::{Dex, NormalizedPool};
    use serde_json::json;

    fn scored(address: &str, name: &str, score: f64) -> ScoredPool {
        ScoredPool {
            pool: NormalizedPool {
                dex: Dex::Thala,
                name: name.to_string(),
                pool_address: address.to_string(),
                tvl: 50_000.0,
                volume24h: 1_000.0,
                volatility: 0.1,
                apr: 0.0,
                raw: json!({}),
            },
            score,
        }
    }

    fn addresses(pools: &[ScoredPool]) -> Vec<&str> {
        pools.iter().map(|p| p.pool.pool_address.as_str()).collect()
    }

    #[test]
    fn test_rank_sorts_and_keeps_ties_in_order() {
        let ranked = rank_and_dedupe(vec![
            scored("a", "A", 0.1),
            scored("b", "B", 0.5),
            scored("c", "C", 0.5),
            scored("d", "D", 0.9),
        ]);
        assert_eq!(addresses(&ranked), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_dedupe_keeps_highest_score() {
        let ranked = rank_and_dedupe(vec![
            scored("x", "first", 0.2),
            scored("y", "Y", 0.3),
            scored("x", "second", 0.7),
            scored("x", "third", 0.1),
        ]);
        assert_eq!(addresses(&ranked), vec!["x", "y"]);
        assert_eq!(ranked[0].pool.name, "second");
        assert_eq!(ranked[0].score, 0.7);
    }

    #[test]
    fn test_stable_and_volatile_asymmetry() {
        let ranked = vec![
            scored("1", "APT / USDC", 0.9),
            scored("2", "stAPT / APT Stable", 0.8),
            scored("3", "APT / THL", 0.7),
            scored("4", "sUSDe / USDT", 0.6),
        ];
        assert_eq!(addresses(&best_stables(&ranked)), vec!["1", "2", "4"]);
        // "stable" without a USD marker counts on both sides
        assert_eq!(addresses(&best_volatile(&ranked)), vec!["2", "3"]);
    }

    #[test]
    fn test_high_apr_sorted_by_apr() {
        let mut ranked = vec![
            scored("a", "A", 0.9),
            scored("b", "B", 0.8),
            scored("c", "C", 0.7),
        ];
        ranked[0].pool.apr = 30.0;
        ranked[1].pool.apr = 29.99;
        ranked[2].pool.apr = 120.5;
        assert_eq!(addresses(&high_apr(&ranked)), vec!["c", "a"]);
    }

    #[test]
    fn test_low_risk_conditions() {
        let mut ranked = vec![
            scored("ok", "USDC / USDT", 0.9),
            scored("no-marker", "APT / THL", 0.8),
            scored("volatile", "APT / USDC", 0.7),
            scored("small", "USD1 / USDC", 0.6),
        ];
        ranked[2].pool.volatility = -0.5;
        ranked[3].pool.tvl = 30_000.0;
        assert_eq!(addresses(&low_risk(&ranked)), vec!["ok"]);
    }

    #[test]
    fn test_view_limits_and_all_envelope() {
        let ranked: Vec<ScoredPool> = (0..30)
            .map(|i| scored(&i.to_string(), "APT / THL", 1.0 - i as f64 / 100.0))
            .collect();

        assert_eq!(ScoreView::Top10.apply(ranked.clone()).pools().len(), 10);
        assert_eq!(ScoreView::BestVolatile.apply(ranked.clone()).pools().len(), 15);

        match ScoreView::All.apply(ranked) {
            ViewResult::All(all) => {
                assert_eq!(all.count, 30);
                assert_eq!(all.top.len(), 20);
                assert_eq!(all.all.len(), 30);
            }
            other => panic!("unexpected view result: {:?}", other),
        }
    }

    #[test]
    fn test_slugs_round_trip_and_scopes() {
        for view in ScoreView::ALL_VIEWS {
            assert_eq!(ScoreView::from_slug(view.slug()), Some(view));
        }
        assert_eq!(ScoreView::from_slug("nope"), None);
        for view in [
            ScoreView::Top10,
            ScoreView::BestStables,
            ScoreView::BestVolatile,
            ScoreView::HighApr,
            ScoreView::LowRisk,
        ] {
            assert_eq!(view.scope(), SourceScope::GeckoTerminal, "{}", view.slug());
        }
        assert_eq!(ScoreView::TopNamed.scope(), SourceScope::All);
        assert_eq!(ScoreView::All.scope(), SourceScope::All);
    }
}
