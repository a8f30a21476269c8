//! External analysis — pluggable, trait-based collaborator that can score a
//! (candidate, job) pair instead of the local arithmetic.
//!
//! Default when no API key is configured: `DisabledAnalyzer` (always local).
//! With a key: `GeminiAnalyzer`, one non-retried attempt per pair.
//!
//! `AppState` holds an `Arc<dyn MatchAnalyzer>`, picked at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::llm_client::LlmClient;
use crate::matching::config::MatchingConfig;
use crate::matching::prompts::build_analysis_prompt;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::models::matching::{MatchResult, SkillMatch};

/// A skill verdict as the collaborator reports it. Field names follow the
/// collaborator wire contract, not this crate's conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSkillMatch {
    pub skill: String,
    pub candidate_level: String,
    pub required: bool,
    #[serde(rename = "match")]
    pub matched: bool,
    pub score: f64,
}

/// Full analysis payload the collaborator returns. Same shape as a locally
/// scored result so the two paths are swappable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAnalysis {
    pub score: f64,
    #[serde(default)]
    pub skill_matches: Vec<ExternalSkillMatch>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub gaps: Vec<String>,
}

impl ExternalAnalysis {
    /// Adopts the external analysis wholesale as a `MatchResult`. Scores
    /// outside [0, 100] are clamped.
    pub fn into_result(self, candidate_id: Uuid, job_id: Uuid) -> MatchResult {
        MatchResult {
            candidate_id,
            job_id,
            score: self.score.clamp(0.0, 100.0).round() as u32,
            skill_matches: self
                .skill_matches
                .into_iter()
                .map(|m| SkillMatch {
                    skill: m.skill,
                    candidate_level: m.candidate_level,
                    required: m.required,
                    matched: m.matched,
                    score: m.score,
                })
                .collect(),
            strengths: self.strengths,
            gaps: self.gaps,
        }
    }
}

/// The analysis collaborator boundary. `None` covers every failure mode —
/// unavailability, timeout, malformed response — so callers fall back to
/// the deterministic scorer without ever seeing an error.
#[async_trait]
pub trait MatchAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        profile: &CandidateProfile,
        job: &JobPosting,
        config: &MatchingConfig,
    ) -> Option<ExternalAnalysis>;
}

/// No-op analyzer used when no API key is configured.
pub struct DisabledAnalyzer;

#[async_trait]
impl MatchAnalyzer for DisabledAnalyzer {
    async fn analyze(
        &self,
        _profile: &CandidateProfile,
        _job: &JobPosting,
        _config: &MatchingConfig,
    ) -> Option<ExternalAnalysis> {
        None
    }
}

/// Gemini-backed analyzer. One attempt per pair; any failure is logged and
/// swallowed into `None`.
pub struct GeminiAnalyzer {
    llm: LlmClient,
}

impl GeminiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl MatchAnalyzer for GeminiAnalyzer {
    async fn analyze(
        &self,
        profile: &CandidateProfile,
        job: &JobPosting,
        config: &MatchingConfig,
    ) -> Option<ExternalAnalysis> {
        let prompt = build_analysis_prompt(profile, job, config);
        match self.llm.call_json::<ExternalAnalysis>(&prompt).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                warn!("External analysis failed, falling back to local scorer: {e}");
                None
            }
        }
    }
}
