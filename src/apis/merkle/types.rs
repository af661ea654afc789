use serde::Deserialize;
use serde_json::Value;

/// `GET /markets` envelope; market records are kept as raw JSON
#[derive(Debug, Clone, Deserialize)]
pub struct MerkleMarketsResponse {
    #[serde(default)]
    pub markets: Option<Vec<Value>>,
}
