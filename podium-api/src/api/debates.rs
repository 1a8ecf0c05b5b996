//! Debate resource handlers
//!
//! Create, list (with optional speaker/text filters), get by id, and
//! delete by id. Debates are immutable after creation; there is no
//! update endpoint.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::envelope::{self, ApiError};
use crate::db;
use crate::query::DebateFilter;
use crate::validate;
use crate::AppState;

/// POST /api/debates request body
///
/// Fields are optional at the type level so the validator can name the
/// first missing one instead of serde rejecting the whole body.
#[derive(Debug, Deserialize)]
pub struct CreateDebateRequest {
    pub title: Option<String>,
    pub speaker: Option<String>,
    pub date: Option<String>,
    pub content: Option<String>,
    pub language: Option<String>,
    pub party: Option<String>,
}

/// Query parameters for GET /api/debates
#[derive(Debug, Default, Deserialize)]
pub struct DebateListQuery {
    /// Exact speaker match
    pub speaker: Option<String>,
    /// Case-insensitive substring search over title and content
    pub q: Option<String>,
}

/// POST /api/debates
pub async fn create_debate(
    State(state): State<AppState>,
    Json(req): Json<CreateDebateRequest>,
) -> Result<Response, ApiError> {
    let new_debate = validate::debate(req)?;

    match db::debates::insert(&state.db, new_debate).await {
        Ok(debate) => {
            info!(id = %debate.id, speaker = %debate.speaker, "Created debate");
            Ok(envelope::created(debate))
        }
        Err(e) => {
            error!("Failed to create debate: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

/// GET /api/debates
///
/// Results are always newest-created-first, filtered or not.
pub async fn list_debates(
    State(state): State<AppState>,
    Query(params): Query<DebateListQuery>,
) -> Result<Response, ApiError> {
    let filter = DebateFilter::new(params.speaker, params.q);

    match db::debates::list(&state.db, &filter).await {
        Ok(debates) => Ok(envelope::ok(debates)),
        Err(e) => {
            error!("Failed to list debates: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

/// GET /api/debates/:id
pub async fn get_debate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(id) = normalize_id(&id) else {
        return Err(debate_not_found());
    };

    match db::debates::get(&state.db, &id).await {
        Ok(Some(debate)) => Ok(envelope::ok(debate)),
        Ok(None) => Err(debate_not_found()),
        Err(e) => {
            error!(%id, "Failed to fetch debate: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

/// DELETE /api/debates/:id
pub async fn delete_debate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(id) = normalize_id(&id) else {
        return Err(debate_not_found());
    };

    match db::debates::delete(&state.db, &id).await {
        Ok(true) => {
            info!(%id, "Deleted debate");
            Ok(envelope::message("Debate deleted"))
        }
        Ok(false) => Err(debate_not_found()),
        Err(e) => {
            error!(%id, "Failed to delete debate: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

/// A malformed id cannot name a stored record, so it maps to the same
/// not-found response as an absent one
fn normalize_id(raw: &str) -> Option<String> {
    Uuid::parse_str(raw).ok().map(|id| id.to_string())
}

fn debate_not_found() -> ApiError {
    ApiError::NotFound("Debate not found".to_string())
}
