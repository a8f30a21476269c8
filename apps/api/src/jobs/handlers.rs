//! Axum route handlers for job postings.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::{self, CreateJob, UpdateJob};
use crate::models::job::JobPosting;
use crate::state::AppState;

/// POST /api/v1/jobs
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreateJob>,
) -> Result<Json<JobPosting>, AppError> {
    Ok(Json(store::insert(&state.db, &request).await?))
}

/// GET /api/v1/jobs
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(store::list(&state.db).await?))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateJob>,
) -> Result<Json<JobPosting>, AppError> {
    let existing = store::fetch(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    let updated = store::update(&state.db, &existing, &request).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !store::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
