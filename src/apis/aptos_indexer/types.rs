use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolReservesData {
    #[serde(default)]
    pub current_fungible_asset_balances: Option<Vec<FungibleAssetBalance>>,
}

/// One asset balance held by an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FungibleAssetBalance {
    pub owner_address: String,
    #[serde(default)]
    pub asset_type: Option<String>,
    /// Indexer amounts arrive as numbers or numeric strings; passed through untouched
    #[serde(default)]
    pub amount: Value,
}
