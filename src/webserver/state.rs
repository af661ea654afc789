/// Shared application state for the webserver
///
/// Holds the API clients and the pool service that route handlers use.
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::apis::ApiManager;
use crate::config::WebserverConfig;
use crate::pools::PoolService;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Webserver configuration
    pub config: Arc<WebserverConfig>,

    /// Upstream API clients (stats, on-chain lookups)
    pub apis: Arc<ApiManager>,

    /// Pool fetch and scoring pipeline
    pub pools: Arc<PoolService>,

    /// Server startup time
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: WebserverConfig, apis: Arc<ApiManager>, pools: Arc<PoolService>) -> Self {
        Self {
            config: Arc::new(config),
            apis,
            pools,
            startup_time: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.startup_time).num_seconds().max(0) as u64
    }
}
