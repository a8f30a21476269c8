use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::matching::analyzer::MatchAnalyzer;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable analysis collaborator. `GeminiAnalyzer` when a key is
    /// configured, `DisabledAnalyzer` otherwise.
    pub analyzer: Arc<dyn MatchAnalyzer>,
}
