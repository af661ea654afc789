/// Pool service - fan-out over the sources, then the scoring pipeline
///
/// Every source of the requested scope is fetched on its own task under a
/// hard per-fetch timeout; results are merged in source order before
/// normalization, filtering, scoring and ranking.
use futures::future::join_all;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

use super::filter::filter_pools;
use super::normalize::normalize_all;
use super::ranking::{rank_and_dedupe, ScoreView, ViewResult};
use super::scoring::score_pools;
use super::sources::{build_sources, PoolSource};
use super::types::{Dex, NormalizedPool, RawPoolRecord, ScoredPool, SourceScope};
use crate::apis::ApiManager;
use crate::config::SourcesConfig;
use crate::errors::PoolScoreError;
use crate::logger::{self, LogTag};

/// Raw listings of one source
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub dex: Dex,
    pub records: Vec<RawPoolRecord>,
}

pub struct PoolService {
    sources: Vec<Arc<dyn PoolSource>>,
    fetch_timeout: Duration,
}

impl PoolService {
    pub fn new(sources: Vec<Arc<dyn PoolSource>>, fetch_timeout: Duration) -> Self {
        Self {
            sources,
            fetch_timeout,
        }
    }

    pub fn from_api_manager(apis: &ApiManager, config: &SourcesConfig) -> Self {
        Self::new(
            build_sources(apis, config),
            Duration::from_secs(config.fetch_timeout_seconds),
        )
    }

    pub fn sources(&self) -> &[Arc<dyn PoolSource>] {
        &self.sources
    }

    pub fn dexes(&self) -> Vec<Dex> {
        self.sources.iter().map(|s| s.dex()).collect()
    }

    /// Fetch every source in `scope` concurrently, preserving source order
    ///
    /// A timed-out fetch counts as an empty listing. A fetch task that
    /// panics is reported as an internal error.
    pub async fn fetch_scope(&self, scope: SourceScope) -> Result<Vec<SourceBatch>, PoolScoreError> {
        let selected: Vec<Arc<dyn PoolSource>> = self
            .sources
            .iter()
            .filter(|s| scope.includes(&s.dex()))
            .cloned()
            .collect();

        self.fetch_sources(selected).await
    }

    async fn fetch_sources(
        &self,
        sources: Vec<Arc<dyn PoolSource>>,
    ) -> Result<Vec<SourceBatch>, PoolScoreError> {
        let timeout = self.fetch_timeout;
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                let source = Arc::clone(source);
                tokio::spawn(async move { fetch_with_timeout(source, timeout).await })
            })
            .collect();

        let mut batches = Vec::with_capacity(handles.len());
        for (source, joined) in sources.iter().zip(join_all(handles).await) {
            batches.push(SourceBatch {
                dex: source.dex(),
                records: joined?,
            });
        }
        Ok(batches)
    }

    /// Raw listings of every source serving `dex` (empty when none is configured)
    pub async fn fetch_dex(&self, dex: &Dex) -> Result<Vec<RawPoolRecord>, PoolScoreError> {
        let selected: Vec<Arc<dyn PoolSource>> = self
            .sources
            .iter()
            .filter(|s| &s.dex() == dex)
            .cloned()
            .collect();

        Ok(self
            .fetch_sources(selected)
            .await?
            .into_iter()
            .flat_map(|b| b.records)
            .collect())
    }

    /// Normalized, unfiltered listings of one DEX
    pub async fn normalized_for(&self, dex: &Dex) -> Result<Vec<NormalizedPool>, PoolScoreError> {
        Ok(normalize_all(&self.fetch_dex(dex).await?))
    }

    /// Full pipeline: fetch → normalize → filter → score → rank/dedupe
    pub async fn load_ranked(&self, scope: SourceScope) -> Result<Vec<ScoredPool>, PoolScoreError> {
        let records: Vec<RawPoolRecord> = self
            .fetch_scope(scope)
            .await?
            .into_iter()
            .flat_map(|b| b.records)
            .collect();
        let fetched = records.len();

        let filtered = filter_pools(normalize_all(&records));
        let kept = filtered.len();
        let ranked = rank_and_dedupe(score_pools(filtered));

        logger::debug(
            LogTag::Pools,
            &format!(
                "Pipeline {:?}: fetched={}, after filter={}, unique={}",
                scope,
                fetched,
                kept,
                ranked.len()
            ),
        );

        Ok(ranked)
    }

    pub async fn score_view(&self, view: ScoreView) -> Result<ViewResult, PoolScoreError> {
        let ranked = self.load_ranked(view.scope()).await?;
        Ok(view.apply(ranked))
    }

    /// `<dex>_count` and `sample_<dex>` (first raw record or null) per source
    pub async fn debug_snapshot(&self) -> Result<Map<String, Value>, PoolScoreError> {
        let mut snapshot = Map::new();
        for batch in self.fetch_scope(SourceScope::All).await? {
            let count_key = format!("{}_count", batch.dex);
            let sample_key = format!("sample_{}", batch.dex);

            let count = snapshot
                .get(&count_key)
                .and_then(Value::as_u64)
                .unwrap_or(0)
                + batch.records.len() as u64;
            snapshot.insert(count_key, Value::from(count));

            if snapshot.get(&sample_key).map_or(true, Value::is_null) {
                let sample = batch
                    .records
                    .into_iter()
                    .next()
                    .map(|r| r.attributes)
                    .unwrap_or(Value::Null);
                snapshot.insert(sample_key, sample);
            }
        }
        Ok(snapshot)
    }
}

async fn fetch_with_timeout(source: Arc<dyn PoolSource>, timeout: Duration) -> Vec<RawPoolRecord> {
    match tokio::time::timeout(timeout, source.fetch()).await {
        Ok(records) => records,
        Err(_) => {
            logger::warning(
                LogTag::Pools,
                &format!(
                    "{} fetch exceeded {}s, continuing without it",
                    source.dex(),
                    timeout.as_secs_f64()
                ),
            );
            Vec::new()
        }
    }
}
