/// Raw listing → `NormalizedPool`
///
/// Every field is read through an ordered list of JSON paths. The first path
/// holding a truthy value (anything but null, false, "" or 0) wins, otherwise
/// the field falls back to its default.
use serde_json::Value;

use super::types::{NormalizedPool, RawPoolRecord};

pub const NAME_CANDIDATES: &[&str] = &["name"];
pub const ADDRESS_CANDIDATES: &[&str] = &["address", "poolAddress", "id"];
pub const TVL_CANDIDATES: &[&str] = &["reserve_in_usd", "tvl"];
pub const VOLUME_CANDIDATES: &[&str] = &["volume_usd.h24", "volume24h"];
pub const VOLATILITY_CANDIDATES: &[&str] = &["price_change_percentage.h24", "volatility"];
pub const APR_CANDIDATES: &[&str] = &["apr"];

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// Resolve a dotted path (`volume_usd.h24`) inside `value`
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
}

/// First candidate path whose value is truthy
pub fn first_present<'a>(value: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|path| get_path(value, path))
        .find(|v| is_truthy(v))
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numbers and numeric strings; everything else (or non-finite) is 0
pub fn to_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_field(raw: &Value, candidates: &[&str], fallback: &str) -> String {
    first_present(raw, candidates)
        .map(to_text)
        .unwrap_or_else(|| fallback.to_string())
}

fn number_field(raw: &Value, candidates: &[&str]) -> f64 {
    first_present(raw, candidates).map(to_number).unwrap_or(0.0)
}

pub fn normalize(record: &RawPoolRecord) -> NormalizedPool {
    let raw = &record.attributes;
    NormalizedPool {
        dex: record.dex.clone(),
        name: text_field(raw, NAME_CANDIDATES, UNKNOWN_NAME),
        pool_address: text_field(raw, ADDRESS_CANDIDATES, UNKNOWN_ADDRESS),
        tvl: number_field(raw, TVL_CANDIDATES),
        volume24h: number_field(raw, VOLUME_CANDIDATES),
        volatility: number_field(raw, VOLATILITY_CANDIDATES),
        apr: number_field(raw, APR_CANDIDATES),
        raw: raw.clone(),
    }
}

pub fn normalize_all(records: &[RawPoolRecord]) -> Vec<NormalizedPool> {
    records.iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::types::Dex;
    use serde_json::json;

    fn gecko_attributes() -> Value {
        json!({
            "address": "0xabc",
            "name": "APT / USDC 0.05%",
            "reserve_in_usd": "12345.67",
            "volume_usd": { "h24": "890.1", "h6": "12" },
            "price_change_percentage": { "h24": "-1.25" }
        })
    }

    #[test]
    fn test_geckoterminal_attributes() {
        let pool = normalize(&RawPoolRecord::new(Dex::Thala, gecko_attributes()));
        assert_eq!(pool.dex, Dex::Thala);
        assert_eq!(pool.name, "APT / USDC 0.05%");
        assert_eq!(pool.pool_address, "0xabc");
        assert_eq!(pool.tvl, 12345.67);
        assert_eq!(pool.volume24h, 890.1);
        assert_eq!(pool.volatility, -1.25);
        assert_eq!(pool.apr, 0.0);
        assert_eq!(pool.raw, gecko_attributes());
    }

    #[test]
    fn test_fallbacks_and_candidate_order() {
        let pool = normalize(&RawPoolRecord::new(
            Dex::Merkle,
            json!({
                "id": "BTC_USD",
                "address": "",
                "tvl": 42,
                "reserve_in_usd": 0,
                "volume24h": "7",
                "volatility": "not a number"
            }),
        ));
        assert_eq!(pool.name, UNKNOWN_NAME);
        assert_eq!(pool.pool_address, "BTC_USD");
        assert_eq!(pool.tvl, 42.0);
        assert_eq!(pool.volume24h, 7.0);
        assert_eq!(pool.volatility, 0.0);

        let empty = normalize(&RawPoolRecord::new(Dex::Thala, json!(null)));
        assert_eq!(empty.pool_address, UNKNOWN_ADDRESS);
        assert_eq!(empty.tvl, 0.0);
    }

    #[test]
    fn test_non_finite_strings_become_zero() {
        assert_eq!(to_number(&json!("inf")), 0.0);
        assert_eq!(to_number(&json!("NaN")), 0.0);
        assert_eq!(to_number(&json!(" 3.5 ")), 3.5);
        assert_eq!(to_number(&json!(true)), 0.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let records = vec![
            RawPoolRecord::new(Dex::Thala, gecko_attributes()),
            RawPoolRecord::new(Dex::Liquidswap, json!({ "name": "", "tvl": "5" })),
            RawPoolRecord::new(Dex::Merkle, json!({ "id": 7, "volume24h": 3 })),
        ];

        for once in normalize_all(&records) {
            let again = normalize(&RawPoolRecord::new(
                once.dex.clone(),
                serde_json::to_value(&once).unwrap(),
            ));
            assert_eq!(again.name, once.name);
            assert_eq!(again.pool_address, once.pool_address);
            assert_eq!(again.tvl, once.tvl);
            assert_eq!(again.volume24h, once.volume24h);
            assert_eq!(again.volatility, once.volatility);
            assert_eq!(again.apr, once.apr);
        }
    }
}
