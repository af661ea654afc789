use axum::{extract::State, response::Response, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    apis::ApiManagerStats,
    webserver::{state::AppState, utils::success_response},
};

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub startup_time: DateTime<Utc>,
    pub uptime_seconds: u64,
    /// Pool sources in merge order
    pub sources: Vec<String>,
    pub apis: ApiManagerStats,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(system_status))
}

/// GET /api/status
async fn system_status(State(state): State<Arc<AppState>>) -> Response {
    let response = StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        startup_time: state.startup_time,
        uptime_seconds: state.uptime_seconds(),
        sources: state
            .pools
            .dexes()
            .iter()
            .map(|d| d.to_string())
            .collect(),
        apis: state.apis.get_all_stats().await,
    };

    success_response(response)
}
