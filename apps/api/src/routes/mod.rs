pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::candidates::handlers as candidate_handlers;
use crate::jobs::handlers as job_handlers;
use crate::matching::handlers as match_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate roster
        .route(
            "/api/v1/candidates",
            post(candidate_handlers::handle_register).get(candidate_handlers::handle_list),
        )
        .route(
            "/api/v1/candidates/:id",
            delete(candidate_handlers::handle_delete),
        )
        .route(
            "/api/v1/candidates/bulk-delete",
            post(candidate_handlers::handle_bulk_delete),
        )
        // Job postings
        .route(
            "/api/v1/jobs",
            post(job_handlers::handle_create).get(job_handlers::handle_list),
        )
        .route(
            "/api/v1/jobs/:id",
            put(job_handlers::handle_update).delete(job_handlers::handle_delete),
        )
        // Matching
        .route(
            "/api/v1/config",
            get(match_handlers::handle_get_config).put(match_handlers::handle_put_config),
        )
        .route("/api/v1/match", post(match_handlers::handle_run_match))
        .route(
            "/api/v1/match/history",
            get(match_handlers::handle_history).delete(match_handlers::handle_clear_history),
        )
        .with_state(state)
}
