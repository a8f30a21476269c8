//! Axum route handlers for the candidate roster.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::candidates::store::{self, NewCandidate};
use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterCandidatesRequest {
    pub candidates: Vec<NewCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub candidate_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

/// POST /api/v1/candidates
///
/// Registers a batch of structured candidate records — the hand-off point
/// from the ingestion collaborator.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterCandidatesRequest>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    if request.candidates.is_empty() {
        return Err(AppError::Validation(
            "candidates cannot be empty".to_string(),
        ));
    }
    let inserted = store::insert_batch(&state.db, &request.candidates).await?;
    Ok(Json(inserted))
}

/// GET /api/v1/candidates
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    Ok(Json(store::list(&state.db).await?))
}

/// DELETE /api/v1/candidates/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !store::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Candidate {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/candidates/bulk-delete
pub async fn handle_bulk_delete(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, AppError> {
    let deleted = store::delete_many(&state.db, &request.candidate_ids).await?;
    Ok(Json(BulkDeleteResponse { deleted }))
}
