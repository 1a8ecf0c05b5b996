//! Uniform response envelope
//!
//! Every endpoint answers `{success, data | error | message}`. All
//! failure paths funnel through [`ApiError`], so nothing can reach the
//! client outside the envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// 200 with a data payload
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(json!({ "success": true, "data": data }))).into_response()
}

/// 201 with the created record
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(json!({ "success": true, "data": data }))).into_response()
}

/// 200 with a confirmation message and no payload
pub fn message(msg: &str) -> Response {
    (StatusCode::OK, Json(json!({ "success": true, "message": msg }))).into_response()
}

/// Handler-boundary error, rendered as the failure envelope
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "success": false, "error": error }))).into_response()
    }
}

impl From<podium_common::Error> for ApiError {
    fn from(err: podium_common::Error) -> Self {
        match err {
            podium_common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
