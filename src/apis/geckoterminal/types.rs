/// GeckoTerminal response types
///
/// Only the envelope is typed. Pool attributes stay an opaque JSON bag so
/// upstream schema drift shows up as missing fields in normalization instead
/// of a failed decode.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /networks/{network}/pools` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GeckoTerminalPoolsResponse {
    #[serde(default)]
    pub data: Option<Vec<GeckoTerminalPool>>,
}

/// One JSON:API resource from a pool listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeckoTerminalPool {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub attributes: Value,
}
