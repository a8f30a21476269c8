//! Batch matching: the full candidates × jobs cross product, one result
//! per pair, candidate-major/job-minor. No pair can fail the batch — a
//! record without a profile scores zero, and analyzer failures degrade to
//! the local scorer.

use crate::matching::analyzer::MatchAnalyzer;
use crate::matching::config::MatchingConfig;
use crate::matching::{insights, scoring};
use crate::models::candidate::{CandidateProfile, CandidateRow};
use crate::models::job::JobPosting;
use crate::models::matching::MatchResult;
use uuid::Uuid;

/// Deterministic local computation for one pair.
pub fn compute_match(
    candidate_id: Uuid,
    profile: &CandidateProfile,
    job: &JobPosting,
    config: &MatchingConfig,
) -> MatchResult {
    MatchResult {
        candidate_id,
        job_id: job.id,
        score: scoring::score(profile, job, config),
        skill_matches: insights::build_skill_matches(profile, job),
        strengths: insights::derive_strengths(profile, job),
        gaps: insights::derive_gaps(profile, job),
    }
}

/// Runs every candidate against every job. Returns exactly
/// |candidates| × |jobs| results in input order; repeated roster entries
/// produce repeated results. The analyzer gets one attempt per pair and
/// its absence or failure is invisible to the caller.
pub async fn match_all(
    candidates: &[CandidateRow],
    jobs: &[JobPosting],
    config: &MatchingConfig,
    analyzer: &dyn MatchAnalyzer,
) -> Vec<MatchResult> {
    let mut results = Vec::with_capacity(candidates.len() * jobs.len());

    for candidate in candidates {
        for job in jobs {
            let result = match candidate.profile() {
                None => MatchResult::unscored(candidate.id, job.id),
                Some(profile) => match analyzer.analyze(profile, job, config).await {
                    Some(analysis) => analysis.into_result(candidate.id, job.id),
                    None => compute_match(candidate.id, profile, job, config),
                },
            };
            results.push(result);
        }
    }

    results
}
