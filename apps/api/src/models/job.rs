use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting. `requirements` are the posting's own required skills,
/// distinct from the global mandatory-skill gate in `MatchingConfig`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub upload_date: NaiveDate,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}
