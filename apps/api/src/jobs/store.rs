//! Job posting repository.

use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job::JobPosting;

/// Manual-entry posting. Omitted fields fall back to the dashboard's
/// placeholder defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub preferred_skills: Option<Vec<String>>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub preferred_skills: Option<Vec<String>>,
}

pub async fn insert(pool: &PgPool, job: &CreateJob) -> Result<JobPosting, sqlx::Error> {
    let row = sqlx::query_as::<_, JobPosting>(
        r#"
        INSERT INTO job_postings
            (id, title, company, description, requirements, preferred_skills,
             upload_date, file_name, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job.title.as_deref().unwrap_or("New Job Position"))
    .bind(job.company.as_deref().unwrap_or("Company Name"))
    .bind(job.description.as_deref().unwrap_or("Job description..."))
    .bind(job.requirements.clone().unwrap_or_default())
    .bind(job.preferred_skills.clone().unwrap_or_default())
    .bind(Utc::now().date_naive())
    .bind("manual-entry.txt")
    .fetch_one(pool)
    .await?;

    info!("Created job posting {} ({})", row.id, row.title);
    Ok(row)
}

pub async fn list(pool: &PgPool) -> Result<Vec<JobPosting>, sqlx::Error> {
    sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings ORDER BY created_at")
        .fetch_all(pool)
        .await
}

pub async fn fetch_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<JobPosting>, sqlx::Error> {
    sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<JobPosting>, sqlx::Error> {
    sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Merge-and-write: absent request fields keep the stored values.
pub async fn update(
    pool: &PgPool,
    existing: &JobPosting,
    changes: &UpdateJob,
) -> Result<JobPosting, sqlx::Error> {
    sqlx::query_as::<_, JobPosting>(
        r#"
        UPDATE job_postings
        SET title = $2, company = $3, description = $4,
            requirements = $5, preferred_skills = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(existing.id)
    .bind(changes.title.as_deref().unwrap_or(&existing.title))
    .bind(changes.company.as_deref().unwrap_or(&existing.company))
    .bind(changes.description.as_deref().unwrap_or(&existing.description))
    .bind(changes.requirements.as_ref().unwrap_or(&existing.requirements))
    .bind(
        changes
            .preferred_skills
            .as_ref()
            .unwrap_or(&existing.preferred_skills),
    )
    .fetch_one(pool)
    .await
}

/// Returns whether a row was actually removed.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
