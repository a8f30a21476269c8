//! Per-pair explanation builders: skill-by-skill verdicts plus heuristic
//! strength/gap bullets. All pure, all deterministic.

use crate::models::candidate::{CandidateProfile, SkillLevel};
use crate::models::job::JobPosting;
use crate::models::matching::SkillMatch;

/// One verdict per posting skill, requirements first then preferred, in
/// posting order. Repeated names are reported repeatedly, never deduped.
pub fn build_skill_matches(profile: &CandidateProfile, job: &JobPosting) -> Vec<SkillMatch> {
    job.requirements
        .iter()
        .chain(job.preferred_skills.iter())
        .map(|job_skill| {
            let needle = job_skill.to_lowercase();
            let candidate_skill = profile
                .skills
                .iter()
                .find(|s| s.name.to_lowercase().contains(&needle));

            SkillMatch {
                skill: job_skill.clone(),
                candidate_level: candidate_skill
                    .map(|s| s.level.as_str().to_string())
                    .unwrap_or_else(|| "none".to_string()),
                required: job.requirements.contains(job_skill),
                matched: candidate_skill.is_some(),
                score: candidate_skill.map(|s| s.weight * 100.0).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Natural-language strength bullets. May be empty.
pub fn derive_strengths(profile: &CandidateProfile, job: &JobPosting) -> Vec<String> {
    let mut strengths = Vec::new();

    let candidate_names: Vec<String> = profile.skills.iter().map(|s| s.name.to_lowercase()).collect();
    let required: Vec<String> = job.requirements.iter().map(|s| s.to_lowercase()).collect();
    let matched = required
        .iter()
        .filter(|job_skill| candidate_names.iter().any(|name| name.contains(job_skill.as_str())))
        .count();

    if matched as f64 > required.len() as f64 * 0.7 {
        strengths.push("Strong technical skill alignment".to_string());
    }

    if profile.experience.len() >= 2 {
        strengths.push("Solid work experience".to_string());
    }

    let expert_names: Vec<&str> = profile
        .skills
        .iter()
        .filter(|s| s.level >= SkillLevel::Advanced)
        .take(3)
        .map(|s| s.name.as_str())
        .collect();
    if !expert_names.is_empty() {
        strengths.push(format!("Expert level skills: {}", expert_names.join(", ")));
    }

    strengths
}

/// Natural-language gap bullets. May be empty.
pub fn derive_gaps(profile: &CandidateProfile, job: &JobPosting) -> Vec<String> {
    let mut gaps = Vec::new();

    let candidate_names: Vec<String> = profile.skills.iter().map(|s| s.name.to_lowercase()).collect();
    // Lowercased on purpose: gap bullets render the normalized names.
    let missing: Vec<String> = job
        .requirements
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|job_skill| !candidate_names.iter().any(|name| name.contains(job_skill.as_str())))
        .take(3)
        .collect();

    if !missing.is_empty() {
        gaps.push(format!("Missing required skills: {}", missing.join(", ")));
    }

    let beginner_names: Vec<&str> = profile
        .skills
        .iter()
        .filter(|s| s.level == SkillLevel::Beginner)
        .take(2)
        .map(|s| s.name.as_str())
        .collect();
    if !beginner_names.is_empty() {
        gaps.push(format!(
            "Skills needing improvement: {}",
            beginner_names.join(", ")
        ));
    }

    gaps
}
