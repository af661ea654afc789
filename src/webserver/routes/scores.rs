/// Score views: /api/scores/*
use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::{
    errors::PoolScoreError,
    logger::{self, LogTag},
    pools::ScoreView,
    webserver::{state::AppState, utils::success_response},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debug", get(debug_counts))
        .route("/top10", get(top10))
        .route("/top-named", get(top_named))
        .route("/all", get(all))
        .route("/best-stables", get(best_stables))
        .route("/best-volatile", get(best_volatile))
        .route("/high-apr", get(high_apr))
        .route("/low-risk", get(low_risk))
}

async fn view_response(state: &AppState, view: ScoreView) -> Result<Response, PoolScoreError> {
    logger::debug(LogTag::Webserver, &format!("GET /api/scores/{}", view.slug()));
    let result = state.pools.score_view(view).await?;
    Ok(success_response(result))
}

/// GET /api/scores/debug
async fn debug_counts(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    Ok(success_response(state.pools.debug_snapshot().await?))
}

/// GET /api/scores/top10
async fn top10(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    view_response(&state, ScoreView::Top10).await
}

/// GET /api/scores/top-named
async fn top_named(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    view_response(&state, ScoreView::TopNamed).await
}

/// GET /api/scores/all
async fn all(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    view_response(&state, ScoreView::All).await
}

/// GET /api/scores/best-stables
async fn best_stables(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    view_response(&state, ScoreView::BestStables).await
}

/// GET /api/scores/best-volatile
async fn best_volatile(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    view_response(&state, ScoreView::BestVolatile).await
}

/// GET /api/scores/high-apr
async fn high_apr(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    view_response(&state, ScoreView::HighApr).await
}

/// GET /api/scores/low-risk
async fn low_risk(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    view_response(&state, ScoreView::LowRisk).await
}
