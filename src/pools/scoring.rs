/// Pool scoring
///
/// APR is estimated from fee income (volume × fee rate, annualized over
/// TVL). Each metric is then scaled against the batch maximum and combined
/// into one weighted score, so scores are only comparable within one batch.
use super::types::{NormalizedPool, ScoredPool};
use crate::logger::{self, LogTag};

/// |24h price change| below this (percent) marks a pool as stable
pub const STABLE_VOLATILITY_THRESHOLD: f64 = 0.5;
pub const STABLE_FEE_RATE: f64 = 0.0004;
pub const VOLATILE_FEE_RATE: f64 = 0.003;
pub const DAYS_PER_YEAR: f64 = 365.0;

pub const APR_WEIGHT: f64 = 0.35;
pub const TVL_WEIGHT: f64 = 0.20;
pub const VOLUME_WEIGHT: f64 = 0.25;
pub const DEX_WEIGHT: f64 = 0.10;
pub const VOLATILITY_PENALTY: f64 = 0.15;

pub fn is_stable(volatility: f64) -> bool {
    volatility.abs() < STABLE_VOLATILITY_THRESHOLD
}

pub fn fee_rate(volatility: f64) -> f64 {
    if is_stable(volatility) {
        STABLE_FEE_RATE
    } else {
        VOLATILE_FEE_RATE
    }
}

/// Annualized fee APR as a fraction (0.21 = 21%). Overflow counts as 0.
pub fn compute_apr(volume24h: f64, tvl: f64, volatility: f64) -> f64 {
    if tvl <= 0.0 {
        return 0.0;
    }
    let apr = volume24h * fee_rate(volatility) * DAYS_PER_YEAR / tvl;
    if apr.is_finite() {
        apr
    } else {
        0.0
    }
}

/// Scale against the batch maximum; a zero maximum scales everything to 0
pub fn normalize_metric(value: f64, max: f64) -> f64 {
    if max == 0.0 {
        0.0
    } else {
        value / max
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn batch_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

/// Score a batch of (already filtered) pools, preserving input order
pub fn score_pools(pools: Vec<NormalizedPool>) -> Vec<ScoredPool> {
    if pools.is_empty() {
        return Vec::new();
    }

    let aprs: Vec<f64> = pools
        .iter()
        .map(|p| compute_apr(p.volume24h, p.tvl, p.volatility))
        .collect();

    let max_apr = batch_max(aprs.iter().copied());
    let max_tvl = batch_max(pools.iter().map(|p| p.tvl));
    let max_volume = batch_max(pools.iter().map(|p| p.volume24h));
    let max_volatility = batch_max(pools.iter().map(|p| p.volatility.abs()));

    logger::debug(
        LogTag::Scoring,
        &format!(
            "Scoring {} pools (max apr={:.4}, tvl={:.2}, volume={:.2}, volatility={:.2})",
            pools.len(),
            max_apr,
            max_tvl,
            max_volume,
            max_volatility
        ),
    );

    pools
        .into_iter()
        .zip(aprs)
        .map(|(mut pool, apr)| {
            let score = APR_WEIGHT * normalize_metric(apr, max_apr)
                + TVL_WEIGHT * normalize_metric(pool.tvl, max_tvl)
                + VOLUME_WEIGHT * normalize_metric(pool.volume24h, max_volume)
                + DEX_WEIGHT * pool.dex.weight()
                - VOLATILITY_PENALTY * normalize_metric(pool.volatility.abs(), max_volatility);

            pool.apr = round_to(apr * 100.0, 2);
            ScoredPool {
                pool,
                score: round_to(score, 4),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::filter::filter_pools;
    use crate::pools::types::Dex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::json;

    fn pool(dex: Dex, address: &str, tvl: f64, volume24h: f64, volatility: f64) -> NormalizedPool {
        NormalizedPool {
            dex,
            name: address.to_string(),
            pool_address: address.to_string(),
            tvl,
            volume24h,
            volatility,
            apr: 0.0,
            raw: json!({}),
        }
    }

    #[test]
    fn test_apr_heuristic() {
        assert!(is_stable(0.49));
        assert!(is_stable(-0.2));
        assert!(!is_stable(0.5));
        assert_eq!(compute_apr(50.0, 0.0, 0.0), 0.0);
        assert!((compute_apr(50.0, 100.0, 0.2) - 0.073).abs() < 1e-12);
        assert!((compute_apr(5.0, 10.0, 5.0) - 0.5475).abs() < 1e-12);
    }

    #[test]
    fn test_two_pool_fixture() {
        let scored = score_pools(vec![
            pool(Dex::Thala, "p1", 100.0, 50.0, 0.2),
            pool(Dex::Merkle, "p2", 10.0, 5.0, 5.0),
        ]);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].pool.apr, 7.3);
        assert_eq!(scored[1].pool.apr, 54.75);
        assert!((scored[0].score - 0.5807).abs() < 1e-9);
        assert!((scored[1].score - 0.325).abs() < 1e-9);
    }

    #[test]
    fn test_single_pool_boundary() {
        let scored = score_pools(vec![pool(Dex::Thala, "only", 1000.0, 10.0, 0.0)]);
        // apr, tvl and volume scale to 1.0; zero volatility scales to 0
        assert!((scored[0].score - 0.89).abs() < 1e-9);
    }

    #[test]
    fn test_overflowing_apr_scores_as_zero() {
        let scored = score_pools(vec![
            pool(Dex::Thala, "dust", 1e-300, 1e300, 0.0),
            pool(Dex::Liquidswap, "normal", 1000.0, 500.0, 0.0),
        ]);

        assert_eq!(compute_apr(1e300, 1e-300, 0.0), 0.0);
        assert_eq!(scored[0].pool.apr, 0.0);
        for entry in &scored {
            assert!(entry.score.is_finite(), "{} scored {}", entry.pool.pool_address, entry.score);
        }
        let json = serde_json::to_value(&scored[0]).unwrap();
        assert!(json["score"].is_number());
    }

    #[test]
    fn test_empty_batch() {
        assert!(score_pools(Vec::new()).is_empty());
    }

    #[test]
    fn test_unknown_dex_weight() {
        let scored = score_pools(vec![pool(
            Dex::Other("cellana".to_string()),
            "x",
            10.0,
            10.0,
            0.0,
        )]);
        assert!((scored[0].score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let dexes = [Dex::Thala, Dex::Liquidswap, Dex::Merkle, Dex::Other("x".into())];

        for round in 0..200 {
            let size = rng.gen_range(1..40);
            let batch: Vec<NormalizedPool> = (0..size)
                .map(|i| {
                    pool(
                        dexes[rng.gen_range(0..dexes.len())].clone(),
                        &format!("{}-{}", round, i),
                        rng.gen_range(-10.0..1e7),
                        rng.gen_range(-10.0..1e6),
                        rng.gen_range(-80.0..80.0),
                    )
                })
                .collect();

            for scored in score_pools(filter_pools(batch)) {
                assert!(scored.score >= -0.15 - 1e-9, "score {}", scored.score);
                assert!(scored.score <= 1.0 + 1e-9, "score {}", scored.score);
                assert!(scored.pool.apr >= 0.0);
            }
        }
    }
}
