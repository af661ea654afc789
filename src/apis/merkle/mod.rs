/// Merkle Trade API client
///
/// Endpoints implemented:
/// 1. /markets - All listed markets
pub mod types;

pub use self::types::MerkleMarketsResponse;

use serde_json::Value;

use super::client::HttpClient;
use super::stats::ApiStats;
use crate::config::{MerkleConfig, SourcesConfig};
use crate::logger::{self, LogTag};

pub struct MerkleClient {
    http: HttpClient,
    base_url: String,
}

impl MerkleClient {
    pub fn new(config: &MerkleConfig, user_agent: &str) -> Result<Self, String> {
        Ok(Self {
            http: HttpClient::new(
                "Merkle",
                config.enabled,
                user_agent,
                config.timeout_seconds,
                0,
            )?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_sources(sources: &SourcesConfig) -> Result<Self, String> {
        Self::new(&sources.merkle, &sources.user_agent)
    }

    pub fn is_enabled(&self) -> bool {
        self.http.is_enabled()
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.http.get_stats().await
    }

    /// Fetch raw market records (`markets` array; missing or null → empty)
    pub async fn fetch_markets(&self) -> Result<Vec<Value>, String> {
        let endpoint = "markets";
        let url = format!("{}/{}", self.base_url, endpoint);

        logger::debug(LogTag::Api, "[MERKLE] Fetching markets");

        let response: MerkleMarketsResponse = self
            .http
            .request_json(endpoint, self.http.client().get(&url))
            .await?;

        Ok(response.markets.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::test_support::{serve, UNREACHABLE_URL};
    use axum::{routing::get, Json, Router};

    fn client_for(base_url: &str) -> MerkleClient {
        let config = MerkleConfig {
            base_url: base_url.to_string(),
            ..MerkleConfig::default()
        };
        MerkleClient::new(&config, "Mozilla/5.0").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_markets() {
        let router = Router::new().route(
            "/markets",
            get(|| async {
                Json(serde_json::json!({
                    "markets": [{ "id": "BTC_USD", "name": "BTC/USD" }, { "id": "ETH_USD" }]
                }))
            }),
        );
        let base = serve(router).await;
        let markets = client_for(&base).fetch_markets().await.unwrap();
        assert_eq!(markets.len(), 2);
        assert_eq!(markets[0]["id"], "BTC_USD");
    }

    #[tokio::test]
    async fn test_missing_markets_key_is_empty() {
        let router = Router::new().route(
            "/markets",
            get(|| async { Json(serde_json::json!({ "status": "ok" })) }),
        );
        let base = serve(router).await;
        assert!(client_for(&base).fetch_markets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_is_error() {
        assert!(client_for(UNREACHABLE_URL).fetch_markets().await.is_err());
    }
}
