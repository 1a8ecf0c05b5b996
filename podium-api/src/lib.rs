//! Podium API service library
//!
//! REST surface over the debate archive (debates, media) plus the proxy
//! endpoint delegating text analysis to the external AI service.
//! `build_router` wires every route, so integration tests can drive the
//! full service without binding a socket.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod query;
pub mod services;
pub mod validate;

use services::AnalyzeService;

/// Request body size ceiling (2 MB)
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// External analysis capability (injected so tests can use a fake)
    pub analyze: Arc<dyn AnalyzeService>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, analyze: Arc<dyn AnalyzeService>) -> Self {
        Self { db, analyze }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route(
            "/api/debates",
            get(api::debates::list_debates).post(api::debates::create_debate),
        )
        .route(
            "/api/debates/:id",
            get(api::debates::get_debate).delete(api::debates::delete_debate),
        )
        .route(
            "/api/media",
            get(api::media::list_media).post(api::media::create_media),
        )
        .route("/api/ai/analyze", post(api::analyze::analyze_text))
        .merge(api::health::health_routes())
        .fallback(api::route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Enable CORS for the web frontend
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
