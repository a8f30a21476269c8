//! Candidate roster repository. Records arrive pre-structured from the
//! ingestion collaborator; nothing here parses resume text.

use chrono::Utc;
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::candidate::{CandidateProfile, CandidateRow};

/// One incoming roster entry. `profile` is absent when upstream extraction
/// failed; the record is still kept so the batch math stays honest.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCandidate {
    pub file_name: String,
    pub profile: Option<CandidateProfile>,
}

pub async fn insert_batch(
    pool: &PgPool,
    new_candidates: &[NewCandidate],
) -> Result<Vec<CandidateRow>, sqlx::Error> {
    let mut inserted = Vec::with_capacity(new_candidates.len());

    for candidate in new_candidates {
        let status = if candidate.profile.is_some() {
            "completed"
        } else {
            "error"
        };
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            INSERT INTO candidates (id, file_name, upload_date, status, profile, created_at)
            VALUES ($1, $2, $3, $4, $5, now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&candidate.file_name)
        .bind(Utc::now().date_naive())
        .bind(status)
        .bind(candidate.profile.as_ref().map(Json))
        .fetch_one(pool)
        .await?;
        inserted.push(row);
    }

    info!("Registered {} candidate record(s)", inserted.len());
    Ok(inserted)
}

pub async fn list(pool: &PgPool) -> Result<Vec<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates ORDER BY created_at")
        .fetch_all(pool)
        .await
}

pub async fn fetch_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}

/// Returns whether a row was actually removed.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Removes many records at once; unknown ids are ignored.
pub async fn delete_many(pool: &PgPool, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM candidates WHERE id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
