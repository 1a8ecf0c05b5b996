//! Media resource handlers
//!
//! Create and list only; media records have no get-by-id, update, or
//! delete endpoints.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};

use crate::api::envelope::{self, ApiError};
use crate::db;
use crate::validate;
use crate::AppState;

/// POST /api/media request body
#[derive(Debug, Deserialize)]
pub struct CreateMediaRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

/// POST /api/media
pub async fn create_media(
    State(state): State<AppState>,
    Json(req): Json<CreateMediaRequest>,
) -> Result<Response, ApiError> {
    let new_media = validate::media(req)?;

    match db::media::insert(&state.db, new_media).await {
        Ok(media) => {
            info!(id = %media.id, "Created media");
            Ok(envelope::created(media))
        }
        Err(e) => {
            error!("Failed to create media: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

/// GET /api/media
///
/// All records, latest upload first.
pub async fn list_media(State(state): State<AppState>) -> Result<Response, ApiError> {
    match db::media::list(&state.db).await {
        Ok(media) => Ok(envelope::ok(media)),
        Err(e) => {
            error!("Failed to list media: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
