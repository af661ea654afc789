/// Aptos indexer GraphQL client
///
/// Used for the on-chain reserves lookup: every fungible asset balance owned
/// by a pool account is one side of that pool's reserves.
pub mod types;

pub use self::types::{FungibleAssetBalance, GraphQlResponse, PoolReservesData};

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::client::HttpClient;
use super::stats::ApiStats;
use crate::config::{AptosIndexerConfig, SourcesConfig};
use crate::logger::{self, LogTag};

const POOL_RESERVES_QUERY: &str = r#"
query PoolReserves($addr: String!, $limit: Int!) {
  current_fungible_asset_balances(
    where: { owner_address: { _eq: $addr } }
    limit: $limit
  ) {
    owner_address
    asset_type
    amount
  }
}
"#;

pub struct AptosIndexerClient {
    http: HttpClient,
    graphql_url: String,
    reserves_limit: u32,
}

impl AptosIndexerClient {
    pub fn new(config: &AptosIndexerConfig, user_agent: &str) -> Result<Self, String> {
        Ok(Self {
            http: HttpClient::new(
                "AptosIndexer",
                config.enabled,
                user_agent,
                config.timeout_seconds,
                0,
            )?,
            graphql_url: config.graphql_url.clone(),
            reserves_limit: config.reserves_limit,
        })
    }

    pub fn from_sources(sources: &SourcesConfig) -> Result<Self, String> {
        Self::new(&sources.aptos_indexer, &sources.user_agent)
    }

    pub fn is_enabled(&self) -> bool {
        self.http.is_enabled()
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.http.get_stats().await
    }

    /// Run a GraphQL query; a non-empty `errors` member fails the call
    pub async fn run_query<T>(&self, query: &str, variables: Value) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let body = json!({ "query": query, "variables": variables });
        let builder = self.http.client().post(&self.graphql_url).json(&body);

        let response: GraphQlResponse<T> = self.http.request_json("graphql", builder).await?;

        if let Some(errors) = response.errors.filter(has_errors) {
            logger::warning(LogTag::Api, &format!("[APTOS] GraphQL errors: {}", errors));
            return Err(errors.to_string());
        }

        response
            .data
            .ok_or_else(|| "GraphQL response contained no data".to_string())
    }

    /// Fungible asset balances owned by `pool_address`
    pub async fn fetch_pool_reserves(
        &self,
        pool_address: &str,
    ) -> Result<Vec<FungibleAssetBalance>, String> {
        logger::debug(
            LogTag::Api,
            &format!("[APTOS] Fetching reserves for {}", pool_address),
        );

        let data: PoolReservesData = self
            .run_query(
                POOL_RESERVES_QUERY,
                json!({ "addr": pool_address, "limit": self.reserves_limit }),
            )
            .await?;

        Ok(data.current_fungible_asset_balances.unwrap_or_default())
    }
}

fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::test_support::serve;
    use axum::{routing::post, Json, Router};

    fn client_for(url: &str) -> AptosIndexerClient {
        let config = AptosIndexerConfig {
            graphql_url: url.to_string(),
            ..AptosIndexerConfig::default()
        };
        AptosIndexerClient::new(&config, "Mozilla/5.0").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_pool_reserves() {
        let router = Router::new().route(
            "/v1/graphql",
            post(|Json(body): Json<Value>| async move {
                let addr = body["variables"]["addr"].clone();
                Json(json!({
                    "data": {
                        "current_fungible_asset_balances": [
                            { "owner_address": addr, "asset_type": "0x1::aptos_coin::AptosCoin", "amount": 1500 },
                            { "owner_address": addr, "asset_type": "0xa::asset::USDC", "amount": "2500" }
                        ]
                    }
                }))
            }),
        );
        let base = serve(router).await;
        let client = client_for(&format!("{}/v1/graphql", base));

        let reserves = client.fetch_pool_reserves("0xpool").await.unwrap();
        assert_eq!(reserves.len(), 2);
        assert_eq!(reserves[0].owner_address, "0xpool");
        assert_eq!(reserves[1].amount, json!("2500"));
    }

    #[tokio::test]
    async fn test_graphql_errors_fail() {
        let router = Router::new().route(
            "/v1/graphql",
            post(|| async { Json(json!({ "errors": [{ "message": "field not found" }] })) }),
        );
        let base = serve(router).await;
        let err = client_for(&format!("{}/v1/graphql", base))
            .fetch_pool_reserves("0xpool")
            .await
            .unwrap_err();
        assert!(err.contains("field not found"));
    }

    #[test]
    fn test_has_errors() {
        assert!(!has_errors(&Value::Null));
        assert!(!has_errors(&json!([])));
        assert!(has_errors(&json!([{ "message": "x" }])));
    }
}
