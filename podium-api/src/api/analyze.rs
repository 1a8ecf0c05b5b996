//! AI analysis proxy handler
//!
//! Forwards the request text to the external analysis service and relays
//! its response verbatim. No validation, no retries; downstream failures
//! surface as server errors carrying the failure message.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::api::envelope::{self, ApiError};
use crate::AppState;

/// POST /api/ai/analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze; forwarded as-is
    #[serde(default)]
    pub text: String,
}

/// POST /api/ai/analyze
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response, ApiError> {
    match state.analyze.analyze(&req.text).await {
        Ok(result) => Ok(envelope::ok(result)),
        Err(e) => {
            error!("Analysis request failed: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
