/// Pool sources
///
/// A `PoolSource` produces the raw listings of one DEX. Sources never fail:
/// upstream errors are logged and turned into an empty listing so one broken
/// DEX cannot take the whole ranking down.
use async_trait::async_trait;
use std::sync::Arc;

use super::types::{Dex, RawPoolRecord};
use crate::apis::{geckoterminal::GeckoTerminalClient, merkle::MerkleClient, ApiManager};
use crate::config::SourcesConfig;
use crate::logger::{self, LogTag};

#[async_trait]
pub trait PoolSource: Send + Sync {
    fn dex(&self) -> Dex;

    /// Raw listings in upstream order; empty on any upstream failure
    async fn fetch(&self) -> Vec<RawPoolRecord>;
}

/// One GeckoTerminal DEX listing (`?dex=<id>`)
pub struct GeckoTerminalSource {
    client: Arc<GeckoTerminalClient>,
    dex: Dex,
}

impl GeckoTerminalSource {
    pub fn new(client: Arc<GeckoTerminalClient>, dex: Dex) -> Self {
        Self { client, dex }
    }
}

#[async_trait]
impl PoolSource for GeckoTerminalSource {
    fn dex(&self) -> Dex {
        self.dex.clone()
    }

    async fn fetch(&self) -> Vec<RawPoolRecord> {
        match self.client.fetch_dex_pools(self.dex.as_str()).await {
            Ok(pools) => pools
                .into_iter()
                .map(|p| RawPoolRecord::new(self.dex.clone(), p.attributes))
                .collect(),
            Err(e) => {
                logger::warning(
                    LogTag::Pools,
                    &format!("{} fetch failed, continuing without it: {}", self.dex, e),
                );
                Vec::new()
            }
        }
    }
}

/// Merkle Trade markets
pub struct MerkleSource {
    client: Arc<MerkleClient>,
}

impl MerkleSource {
    pub fn new(client: Arc<MerkleClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PoolSource for MerkleSource {
    fn dex(&self) -> Dex {
        Dex::Merkle
    }

    async fn fetch(&self) -> Vec<RawPoolRecord> {
        match self.client.fetch_markets().await {
            Ok(markets) => markets
                .into_iter()
                .map(|m| RawPoolRecord::new(Dex::Merkle, m))
                .collect(),
            Err(e) => {
                logger::warning(
                    LogTag::Pools,
                    &format!("merkle fetch failed, continuing without it: {}", e),
                );
                Vec::new()
            }
        }
    }
}

/// Sources in merge order: configured GeckoTerminal DEX ids, then Merkle
///
/// Disabled upstreams contribute no source at all.
pub fn build_sources(apis: &ApiManager, config: &SourcesConfig) -> Vec<Arc<dyn PoolSource>> {
    let mut sources: Vec<Arc<dyn PoolSource>> = Vec::new();

    if apis.geckoterminal.is_enabled() {
        for id in &config.geckoterminal.dexes {
            sources.push(Arc::new(GeckoTerminalSource::new(
                Arc::clone(&apis.geckoterminal),
                Dex::from_id(id),
            )));
        }
    }

    if apis.merkle.is_enabled() {
        sources.push(Arc::new(MerkleSource::new(Arc::clone(&apis.merkle))));
    }

    logger::debug(
        LogTag::Pools,
        &format!(
            "Pool sources: [{}]",
            sources
                .iter()
                .map(|s| s.dex().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    );

    sources
}
