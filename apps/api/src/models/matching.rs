use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Per-job-skill verdict. One entry per element of the posting's
/// requirements-then-preferred list, in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    /// The candidate's proficiency, or "none" when unmatched.
    pub candidate_level: String,
    /// Whether the skill came from the posting's required list.
    pub required: bool,
    pub matched: bool,
    /// Candidate skill weight × 100 when matched, 0 otherwise.
    pub score: f64,
}

/// One match record per (candidate, job) pair. Produced fresh on every
/// run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    /// 0–100. Exactly 0 whenever a configured mandatory skill is absent.
    pub score: u32,
    pub skill_matches: Vec<SkillMatch>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

impl MatchResult {
    /// Zero-score result for a pair that could not be scored (e.g. the
    /// candidate record carries no extracted profile). Keeps the batch
    /// at exactly |candidates| × |jobs| results.
    pub fn unscored(candidate_id: Uuid, job_id: Uuid) -> Self {
        Self {
            candidate_id,
            job_id,
            score: 0,
            skill_matches: Vec::new(),
            strengths: Vec::new(),
            gaps: Vec::new(),
        }
    }
}

/// A persisted matching run, newest-first in history listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchRunRow {
    pub id: Uuid,
    pub ran_at: DateTime<Utc>,
    pub job_titles: Vec<String>,
    pub candidate_count: i32,
    pub results: Json<Vec<MatchResult>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscored_result_is_all_empty() {
        let result = MatchResult::unscored(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(result.score, 0);
        assert!(result.skill_matches.is_empty());
        assert!(result.strengths.is_empty());
        assert!(result.gaps.is_empty());
    }
}
