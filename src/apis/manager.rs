/// API manager - owns one instance of every upstream client
///
/// Each client carries its own rate limiter and stats tracker, so sharing the
/// manager (behind an `Arc`) keeps limits and statistics per upstream rather
/// than per request.
use std::sync::Arc;

use serde::Serialize;

use super::aptos_indexer::AptosIndexerClient;
use super::geckoterminal::GeckoTerminalClient;
use super::merkle::MerkleClient;
use super::stats::ApiStats;
use crate::config::SourcesConfig;
use crate::logger::{self, LogTag};

pub struct ApiManager {
    pub geckoterminal: Arc<GeckoTerminalClient>,
    pub merkle: Arc<MerkleClient>,
    pub aptos_indexer: Arc<AptosIndexerClient>,
}

impl ApiManager {
    pub fn from_config(sources: &SourcesConfig) -> Result<Self, String> {
        logger::info(LogTag::Api, "Initializing API manager");

        let geckoterminal = GeckoTerminalClient::from_sources(sources)
            .map_err(|e| format!("Failed to initialize GeckoTerminal client: {}", e))?;
        let merkle = MerkleClient::from_sources(sources)
            .map_err(|e| format!("Failed to initialize Merkle client: {}", e))?;
        let aptos_indexer = AptosIndexerClient::from_sources(sources)
            .map_err(|e| format!("Failed to initialize Aptos indexer client: {}", e))?;

        for (name, enabled) in [
            ("GeckoTerminal", geckoterminal.is_enabled()),
            ("Merkle", merkle.is_enabled()),
            ("AptosIndexer", aptos_indexer.is_enabled()),
        ] {
            if !enabled {
                logger::warning(
                    LogTag::Api,
                    &format!("{} client disabled via configuration", name),
                );
            }
        }

        Ok(Self {
            geckoterminal: Arc::new(geckoterminal),
            merkle: Arc::new(merkle),
            aptos_indexer: Arc::new(aptos_indexer),
        })
    }

    /// Get aggregated stats from all API clients
    pub async fn get_all_stats(&self) -> ApiManagerStats {
        ApiManagerStats {
            geckoterminal: self.geckoterminal.get_stats().await,
            merkle: self.merkle.get_stats().await,
            aptos_indexer: self.aptos_indexer.get_stats().await,
        }
    }
}

/// Aggregated stats from all API clients
#[derive(Debug, Clone, Serialize)]
pub struct ApiManagerStats {
    pub geckoterminal: ApiStats,
    pub merkle: ApiStats,
    pub aptos_indexer: ApiStats,
}
