//! Entry CRUD route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::EntryRepository;
use serde::Serialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_entry_created, record_entry_deleted};
use domain::models::{CreateEntryRequest, Entry, UpdateEntryRequest};

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// List all entries, newest first.
///
/// GET /api/entries
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, ApiError> {
    let repo = EntryRepository::new(state.pool.clone());

    let entries = repo.list().await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Create a new entry.
///
/// POST /api/entries
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    // Validate before any query is issued
    request.validate()?;

    let repo = EntryRepository::new(state.pool.clone());

    let entry: Entry = repo.create(&request.title, &request.content).await?.into();

    record_entry_created();
    tracing::info!(entry_id = entry.id, "Entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Get a single entry.
///
/// GET /api/entries/:id
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Entry>, ApiError> {
    let repo = EntryRepository::new(state.pool.clone());

    let entry: Entry = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Entry not found".to_string()))?
        .into();

    Ok(Json(entry))
}

/// Replace an entry's title and content.
///
/// PUT /api/entries/:id
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateEntryRequest>,
) -> Result<Json<Entry>, ApiError> {
    request.validate()?;

    let repo = EntryRepository::new(state.pool.clone());

    let entry: Entry = repo
        .update(id, &request.title, &request.content)
        .await?
        .ok_or_else(|| ApiError::NotFound("Entry not found".to_string()))?
        .into();

    tracing::info!(entry_id = entry.id, "Entry updated");

    Ok(Json(entry))
}

/// Delete an entry.
///
/// DELETE /api/entries/:id
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repo = EntryRepository::new(state.pool.clone());

    let deleted = repo.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Entry not found".to_string()));
    }

    record_entry_deleted();
    tracing::info!(entry_id = id, "Entry deleted");

    Ok(Json(DeleteResponse {
        message: "Entry deleted successfully".to_string(),
    }))
}
