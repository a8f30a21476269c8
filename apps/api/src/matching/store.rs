//! Repository for matcher-owned state: the matching-config singleton and
//! the persisted run history. All SQL for those tables lives here; the
//! engine itself never touches storage.

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::matching::config::MatchingConfig;
use crate::models::matching::{MatchResult, MatchRunRow};

/// Retained history depth. Older runs are pruned after each insert.
const HISTORY_LIMIT: i64 = 50;

/// Returns the stored configuration, or defaults when none was saved yet.
pub async fn get_config(pool: &PgPool) -> Result<MatchingConfig, sqlx::Error> {
    let stored: Option<Json<MatchingConfig>> =
        sqlx::query_scalar("SELECT config FROM matching_config WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    Ok(stored.map(|j| j.0).unwrap_or_default())
}

/// Upserts the configuration singleton. Validation happens in the handler
/// before this is called.
pub async fn save_config(pool: &PgPool, config: &MatchingConfig) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO matching_config (id, config, updated_at)
        VALUES (1, $1, now())
        ON CONFLICT (id) DO UPDATE SET config = EXCLUDED.config, updated_at = now()
        "#,
    )
    .bind(Json(config))
    .execute(pool)
    .await?;
    Ok(())
}

/// Records a completed run and prunes history beyond `HISTORY_LIMIT`.
pub async fn record_run(
    pool: &PgPool,
    job_titles: &[String],
    candidate_count: i32,
    results: &[MatchResult],
) -> Result<Uuid, sqlx::Error> {
    let run_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO match_runs (id, ran_at, job_titles, candidate_count, results)
        VALUES ($1, now(), $2, $3, $4)
        "#,
    )
    .bind(run_id)
    .bind(job_titles)
    .bind(candidate_count)
    .bind(Json(results))
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        DELETE FROM match_runs
        WHERE id NOT IN (SELECT id FROM match_runs ORDER BY ran_at DESC LIMIT $1)
        "#,
    )
    .bind(HISTORY_LIMIT)
    .execute(pool)
    .await?;

    info!("Recorded match run {run_id} ({} result(s))", results.len());
    Ok(run_id)
}

/// All retained runs, newest first.
pub async fn list_runs(pool: &PgPool) -> Result<Vec<MatchRunRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchRunRow>("SELECT * FROM match_runs ORDER BY ran_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn clear_runs(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM match_runs").execute(pool).await?;
    Ok(())
}
