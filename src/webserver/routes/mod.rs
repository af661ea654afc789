use axum::{response::Response, routing::get, Router};
use serde_json::json;
use std::sync::Arc;

use crate::webserver::{state::AppState, utils::success_response};

pub mod pools;
pub mod scores;
pub mod status;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .nest("/scores", scores::routes())
        .nest("/pools", pools::routes())
}

/// GET /
async fn root() -> Response {
    success_response(json!({ "status": "poolscore backend running" }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    use super::create_router;
    use crate::apis::ApiManager;
    use crate::config::{SourcesConfig, WebserverConfig};
    use crate::pools::{PoolService, PoolSource};
    use crate::webserver::state::AppState;

    pub fn test_router_with(sources: Vec<Arc<dyn PoolSource>>, config: &SourcesConfig) -> Router {
        let apis = ApiManager::from_config(config).unwrap();
        let pools = PoolService::new(sources, Duration::from_secs(5));
        let state = AppState::new(WebserverConfig::default(), Arc::new(apis), Arc::new(pools));
        create_router(Arc::new(state))
    }

    pub fn test_router(sources: Vec<Arc<dyn PoolSource>>) -> Router {
        test_router_with(sources, &SourcesConfig::default())
    }

    pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{get_json, test_router};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_root_status() {
        let (status, body) = get_json(test_router(Vec::new()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "poolscore backend running");
    }
}
