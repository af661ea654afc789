/// GeckoTerminal API client
///
/// API Documentation: https://www.geckoterminal.com/dex-api
///
/// Endpoints implemented:
/// 1. /networks/{network}/pools?dex={dex} - Pool listing used for one DEX
pub mod types;

// Re-export types for external use
pub use self::types::{GeckoTerminalPool, GeckoTerminalPoolsResponse};

use super::client::HttpClient;
use super::stats::ApiStats;
use crate::config::{GeckoTerminalConfig, SourcesConfig};
use crate::logger::{self, LogTag};

/// GeckoTerminal API client with rate limiting and stats tracking
pub struct GeckoTerminalClient {
    http: HttpClient,
    base_url: String,
    network: String,
}

impl GeckoTerminalClient {
    pub fn new(config: &GeckoTerminalConfig, user_agent: &str) -> Result<Self, String> {
        Ok(Self {
            http: HttpClient::new(
                "GeckoTerminal",
                config.enabled,
                user_agent,
                config.timeout_seconds,
                config.rate_limit_per_minute,
            )?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            network: config.network.clone(),
        })
    }

    pub fn from_sources(sources: &SourcesConfig) -> Result<Self, String> {
        Self::new(&sources.geckoterminal, &sources.user_agent)
    }

    pub fn is_enabled(&self) -> bool {
        self.http.is_enabled()
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.http.get_stats().await
    }

    /// Fetch the pool listing GeckoTerminal returns for `?dex=<dex_id>`
    ///
    /// A missing or null `data` array yields an empty listing.
    pub async fn fetch_dex_pools(&self, dex_id: &str) -> Result<Vec<GeckoTerminalPool>, String> {
        let endpoint = format!("networks/{}/pools", self.network);
        let url = format!("{}/{}", self.base_url, endpoint);

        logger::debug(
            LogTag::Api,
            &format!(
                "[GECKOTERMINAL] Fetching pools: network={}, dex={}",
                self.network, dex_id
            ),
        );

        let builder = self.http.client().get(&url).query(&[("dex", dex_id)]);
        let response: GeckoTerminalPoolsResponse =
            self.http.request_json(&endpoint, builder).await?;

        let pools = response.data.unwrap_or_default();
        logger::debug(
            LogTag::Api,
            &format!("[GECKOTERMINAL] dex={} returned {} pools", dex_id, pools.len()),
        );
        Ok(pools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::test_support::serve;
    use axum::{extract::Query, routing::get, Json, Router};
    use std::collections::HashMap;

    fn client_for(base_url: &str) -> GeckoTerminalClient {
        let config = GeckoTerminalConfig {
            base_url: base_url.to_string(),
            ..GeckoTerminalConfig::default()
        };
        GeckoTerminalClient::new(&config, "Mozilla/5.0").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_dex_pools_passes_dex_and_network() {
        let router = Router::new().route(
            "/networks/aptos/pools",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let dex = q.get("dex").cloned().unwrap_or_default();
                Json(serde_json::json!({
                    "data": [{
                        "id": format!("aptos_{}_1", dex),
                        "type": "pool",
                        "attributes": {
                            "address": "0xpool",
                            "name": format!("APT / USDC ({})", dex),
                            "reserve_in_usd": "125000.5",
                            "volume_usd": { "h24": "4000" },
                            "price_change_percentage": { "h24": "-1.2" }
                        }
                    }]
                }))
            }),
        );
        let base = serve(router).await;
        let client = client_for(&base);

        let pools = client.fetch_dex_pools("thala").await.unwrap();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].id.as_deref(), Some("aptos_thala_1"));
        assert_eq!(pools[0].attributes["name"], "APT / USDC (thala)");
        assert_eq!(client.get_stats().await.successful_requests, 1);
    }

    #[tokio::test]
    async fn test_null_data_is_empty() {
        let router = Router::new().route(
            "/networks/aptos/pools",
            get(|| async { Json(serde_json::json!({ "data": null })) }),
        );
        let base = serve(router).await;
        let pools = client_for(&base).fetch_dex_pools("thala").await.unwrap();
        assert!(pools.is_empty());
    }
}
