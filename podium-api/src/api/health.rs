//! Liveness and health endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /
///
/// Plain-text liveness message for load balancers and manual checks.
pub async fn liveness() -> &'static str {
    "API is running..."
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "podium-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build liveness/health routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
}
