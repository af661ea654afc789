/// Response helpers shared by all routes
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::errors::PoolScoreError;
use crate::logger::{self, LogTag};

/// 200 with `data` as the JSON body
pub fn success_response<T: Serialize>(data: T) -> Response {
    Json(data).into_response()
}

/// `status` with `{"error": message}`
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for PoolScoreError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        logger::error(LogTag::Webserver, &format!("Request failed: {}", message));
        error_response(StatusCode::INTERNAL_SERVER_ERROR, &message)
    }
}
