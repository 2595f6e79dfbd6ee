//! Error types for the RANI API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request-level errors
///
/// Turn-level retrieval and generation failures never reach this type;
/// the core absorbs them into reply text. Only input validation surfaces
/// as an HTTP error.
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
