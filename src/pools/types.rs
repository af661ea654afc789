use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// =============================================================================
// DEX IDENTIFIER
// =============================================================================

/// DEX a pool was listed on
///
/// Serialized as its lowercase identifier. `Other` covers any further
/// GeckoTerminal DEX id enabled through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dex {
    Thala,
    Liquidswap,
    Merkle,
    Other(String),
}

impl Dex {
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "thala" => Dex::Thala,
            "liquidswap" => Dex::Liquidswap,
            "merkle" => Dex::Merkle,
            other => Dex::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Dex::Thala => "thala",
            Dex::Liquidswap => "liquidswap",
            Dex::Merkle => "merkle",
            Dex::Other(id) => id,
        }
    }

    /// Reputation weight used by the scorer (unknown DEXes get 0.5)
    pub fn weight(&self) -> f64 {
        match self {
            Dex::Thala => 0.9,
            Dex::Liquidswap => 0.85,
            Dex::Merkle => 0.8,
            Dex::Other(_) => 0.5,
        }
    }

    /// Pools of this DEX are listed through GeckoTerminal
    pub fn is_geckoterminal(&self) -> bool {
        !matches!(self, Dex::Merkle)
    }
}

impl fmt::Display for Dex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Dex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Dex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Dex::from_id(&id))
    }
}

// =============================================================================
// SOURCE SCOPE
// =============================================================================

/// Which sources feed a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceScope {
    /// GeckoTerminal listings only (thala + liquidswap)
    GeckoTerminal,
    /// Every configured source, Merkle included
    All,
}

impl SourceScope {
    pub fn includes(&self, dex: &Dex) -> bool {
        match self {
            SourceScope::GeckoTerminal => dex.is_geckoterminal(),
            SourceScope::All => true,
        }
    }
}

// =============================================================================
// POOL RECORDS
// =============================================================================

/// One listing exactly as the upstream returned it
#[derive(Debug, Clone, PartialEq)]
pub struct RawPoolRecord {
    pub dex: Dex,
    pub attributes: Value,
}

impl RawPoolRecord {
    pub fn new(dex: Dex, attributes: Value) -> Self {
        Self { dex, attributes }
    }
}

/// Source-independent pool shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPool {
    pub dex: Dex,
    pub name: String,
    pub pool_address: String,
    pub tvl: f64,
    pub volume24h: f64,
    /// Signed 24h price change, in percent
    pub volatility: f64,
    /// Fraction before scoring, percent (2 decimals) after
    pub apr: f64,
    pub raw: Value,
}

/// A pool with its composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPool {
    #[serde(flatten)]
    pub pool: NormalizedPool,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dex_ids_and_weights() {
        assert_eq!(Dex::from_id("Thala"), Dex::Thala);
        assert_eq!(Dex::from_id("cellana"), Dex::Other("cellana".to_string()));
        assert_eq!(Dex::Liquidswap.weight(), 0.85);
        assert_eq!(Dex::Other("cellana".to_string()).weight(), 0.5);
        assert_eq!(serde_json::to_value(Dex::Merkle).unwrap(), json!("merkle"));
    }

    #[test]
    fn test_scope() {
        assert!(SourceScope::GeckoTerminal.includes(&Dex::Thala));
        assert!(!SourceScope::GeckoTerminal.includes(&Dex::Merkle));
        assert!(SourceScope::All.includes(&Dex::Merkle));
    }

    #[test]
    fn test_scored_pool_serializes_flat() {
        let scored = ScoredPool {
            pool: NormalizedPool {
                dex: Dex::Thala,
                name: "APT / USDC".to_string(),
                pool_address: "0x1".to_string(),
                tvl: 100.0,
                volume24h: 50.0,
                volatility: 0.2,
                apr: 7.3,
                raw: json!({}),
            },
            score: 0.5807,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["poolAddress"], "0x1");
        assert_eq!(value["volume24h"], 50.0);
        assert_eq!(value["dex"], "thala");
        assert_eq!(value["score"], 0.5807);
    }
}
