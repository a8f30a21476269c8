use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Proficiency scale for a candidate skill. Variants are ordered, so
/// `level >= SkillLevel::Advanced` reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    /// Whether the candidate applied this skill in a real project.
    pub project_used: bool,
    /// Confidence/importance weight in [0, 1]; drives the per-skill score.
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// Free-text range, e.g. "2020-2023". Never parsed for scoring.
    pub duration: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub gpa: Option<String>,
}

/// Structured candidate data handed over by the ingestion collaborator.
/// Immutable once produced; the matcher only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub personal_website: Option<String>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

/// A roster entry as stored. `profile` is NULL when extraction failed
/// upstream; scoring treats such records as a non-match, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub file_name: String,
    pub upload_date: NaiveDate,
    pub status: String,
    pub profile: Option<Json<CandidateProfile>>,
    pub created_at: DateTime<Utc>,
}

impl CandidateRow {
    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref().map(|j| &j.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_ordering() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Intermediate < SkillLevel::Advanced);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
    }

    #[test]
    fn test_skill_level_serde_lowercase() {
        let level: SkillLevel = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(level, SkillLevel::Advanced);
        assert_eq!(serde_json::to_string(&SkillLevel::Expert).unwrap(), "\"expert\"");
    }

    #[test]
    fn test_profile_deserializes_with_optional_links_absent() {
        let json = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+1-555-0100",
            "address": "12 Analytical Way",
            "skills": [
                {"name": "JavaScript", "level": "advanced", "project_used": true, "weight": 0.9}
            ],
            "experience": [],
            "education": []
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert!(profile.linkedin.is_none());
        assert_eq!(profile.skills[0].level, SkillLevel::Advanced);
    }
}
