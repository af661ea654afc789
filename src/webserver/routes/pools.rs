/// Per-DEX listings and on-chain reserves: /api/pools/*
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    apis::aptos_indexer::FungibleAssetBalance,
    errors::PoolScoreError,
    logger::{self, LogTag},
    pools::{Dex, NormalizedPool},
    webserver::{state::AppState, utils::success_response},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/thala", get(thala))
        .route("/liquidswap", get(liquidswap))
        .route("/merkle", get(merkle))
        .route("/all", get(all))
        .route("/onchain/:address", get(onchain_reserves))
}

#[derive(Debug, Serialize)]
pub struct AllPoolsResponse {
    pub thala: Vec<NormalizedPool>,
    pub liquidswap: Vec<NormalizedPool>,
    pub merkle: Vec<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnchainReservesResponse {
    pub pool_address: String,
    pub reserves: Vec<FungibleAssetBalance>,
}

async fn merkle_markets(state: &AppState) -> Result<Vec<Value>, PoolScoreError> {
    Ok(state
        .pools
        .fetch_dex(&Dex::Merkle)
        .await?
        .into_iter()
        .map(|r| r.attributes)
        .collect())
}

/// GET /api/pools/thala
async fn thala(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    Ok(success_response(state.pools.normalized_for(&Dex::Thala).await?))
}

/// GET /api/pools/liquidswap
async fn liquidswap(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    Ok(success_response(
        state.pools.normalized_for(&Dex::Liquidswap).await?,
    ))
}

/// GET /api/pools/merkle
async fn merkle(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    Ok(success_response(merkle_markets(&state).await?))
}

/// GET /api/pools/all
async fn all(State(state): State<Arc<AppState>>) -> Result<Response, PoolScoreError> {
    let (thala, liquidswap, merkle) = tokio::try_join!(
        state.pools.normalized_for(&Dex::Thala),
        state.pools.normalized_for(&Dex::Liquidswap),
        merkle_markets(&state),
    )?;

    Ok(success_response(AllPoolsResponse {
        thala,
        liquidswap,
        merkle,
    }))
}

/// GET /api/pools/onchain/:address
async fn onchain_reserves(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Response, PoolScoreError> {
    logger::debug(
        LogTag::Webserver,
        &format!("Fetching on-chain reserves for {}", address),
    );

    let reserves = state
        .apis
        .aptos_indexer
        .fetch_pool_reserves(&address)
        .await
        .map_err(PoolScoreError::network_error)?;

    Ok(success_response(OnchainReservesResponse {
        pool_address: address,
        reserves,
    }))
}
