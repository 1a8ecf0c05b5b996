//! HTTP API handlers

pub mod analyze;
pub mod debates;
pub mod envelope;
pub mod health;
pub mod media;

use axum::http::{Method, Uri};

use envelope::ApiError;

/// Fallback for unmatched routes
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route not found: {} {}", method, uri))
}
