//! Axum route handlers for the matching API: run a batch, read/update the
//! scoring configuration, and inspect run history.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::candidates::store as candidates_store;
use crate::errors::AppError;
use crate::jobs::store as jobs_store;
use crate::matching::config::MatchingConfig;
use crate::matching::{engine, store};
use crate::models::candidate::CandidateRow;
use crate::models::job::JobPosting;
use crate::models::matching::{MatchResult, MatchRunRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub candidate_ids: Vec<Uuid>,
    pub job_ids: Vec<Uuid>,
    /// Inline override for this run; the persisted config is used when
    /// absent.
    pub config: Option<MatchingConfig>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
}

/// Resolves requested ids against fetched rows, preserving request order
/// and duplicates. Unknown ids are skipped with a warning, never an error.
fn resolve_in_request_order<T: Clone>(
    ids: &[Uuid],
    rows: &[T],
    id_of: impl Fn(&T) -> Uuid,
    kind: &str,
) -> Vec<T> {
    ids.iter()
        .filter_map(|id| {
            let found = rows.iter().find(|row| id_of(row) == *id).cloned();
            if found.is_none() {
                warn!("Unknown {kind} id {id} in match request, skipping");
            }
            found
        })
        .collect()
}

/// POST /api/v1/match
///
/// Runs the full cross product of the requested candidates and jobs and
/// records the run in history. Analyzer failures never fail the batch.
pub async fn handle_run_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let config = match request.config {
        Some(config) => {
            config.validate().map_err(AppError::Validation)?;
            config
        }
        None => store::get_config(&state.db).await?,
    };

    let candidate_rows = candidates_store::fetch_by_ids(&state.db, &request.candidate_ids).await?;
    let candidates: Vec<CandidateRow> =
        resolve_in_request_order(&request.candidate_ids, &candidate_rows, |c| c.id, "candidate");

    let job_rows = jobs_store::fetch_by_ids(&state.db, &request.job_ids).await?;
    let jobs: Vec<JobPosting> =
        resolve_in_request_order(&request.job_ids, &job_rows, |j| j.id, "job");

    let results = engine::match_all(&candidates, &jobs, &config, state.analyzer.as_ref()).await;

    let mut seen = Vec::new();
    let mut job_titles = Vec::new();
    for job in &jobs {
        if !seen.contains(&job.id) {
            seen.push(job.id);
            job_titles.push(job.title.clone());
        }
    }

    // History is best-effort: a failed insert must not fail the run.
    if let Err(e) = store::record_run(
        &state.db,
        &job_titles,
        request.candidate_ids.len() as i32,
        &results,
    )
    .await
    {
        warn!("Failed to record match run in history: {e}");
    }

    Ok(Json(MatchResponse { results }))
}

/// GET /api/v1/config
pub async fn handle_get_config(
    State(state): State<AppState>,
) -> Result<Json<MatchingConfig>, AppError> {
    Ok(Json(store::get_config(&state.db).await?))
}

/// PUT /api/v1/config
///
/// Weight-sum validation lives here, on the caller side — the scorer
/// itself applies whatever weights it is given.
pub async fn handle_put_config(
    State(state): State<AppState>,
    Json(config): Json<MatchingConfig>,
) -> Result<StatusCode, AppError> {
    config.validate().map_err(AppError::Validation)?;
    store::save_config(&state.db, &config).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/match/history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchRunRow>>, AppError> {
    Ok(Json(store::list_runs(&state.db).await?))
}

/// DELETE /api/v1/match/history
pub async fn handle_clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    store::clear_runs(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}
