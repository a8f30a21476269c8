//! Deterministic match scoring — pure functions, no I/O.
//!
//! Skill matching is substring containment on lowercased names: a candidate
//! skill "JavaScript" satisfies a job skill "Java". Intentional; changing it
//! changes scores product-wide.

use crate::matching::config::MatchingConfig;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

/// Fixed assumption of years per listed role. Durations are free text and
/// never parsed.
const YEARS_PER_ROLE: f64 = 2.0;

fn skill_names_lower(profile: &CandidateProfile) -> Vec<String> {
    profile.skills.iter().map(|s| s.name.to_lowercase()).collect()
}

/// The mandatory gate: every configured mandatory skill must be contained
/// in at least one candidate skill name. An empty list always passes.
pub fn mandatory_skills_met(profile: &CandidateProfile, mandatory_skills: &[String]) -> bool {
    if mandatory_skills.is_empty() {
        return true;
    }
    let names = skill_names_lower(profile);
    mandatory_skills.iter().all(|skill| {
        let needle = skill.to_lowercase();
        names.iter().any(|name| name.contains(&needle))
    })
}

/// Fraction of the posting's requirements + preferred skills covered by the
/// candidate, as a 0–100 component. Duplicate entries in the posting count
/// literally, in both numerator and denominator. Empty list scores 0.
pub fn skill_component(profile: &CandidateProfile, job: &JobPosting) -> f64 {
    let job_skills: Vec<String> = job
        .requirements
        .iter()
        .chain(job.preferred_skills.iter())
        .map(|s| s.to_lowercase())
        .collect();
    if job_skills.is_empty() {
        return 0.0;
    }
    let names = skill_names_lower(profile);
    let matched = job_skills
        .iter()
        .filter(|job_skill| names.iter().any(|name| name.contains(job_skill.as_str())))
        .count();
    matched as f64 / job_skills.len() as f64 * 100.0
}

/// Experience sufficiency as a 0–100 component. A zero minimum is trivially
/// satisfied (guards the division, not observed source behavior).
pub fn experience_component(role_count: usize, min_years: u32) -> f64 {
    if min_years == 0 {
        return 100.0;
    }
    let approx_years = role_count as f64 * YEARS_PER_ROLE;
    if approx_years >= min_years as f64 {
        100.0
    } else {
        approx_years / min_years as f64 * 100.0
    }
}

/// Fraction of required degree names contained in some candidate degree,
/// as a 0–100 component. No required degrees scores 100.
pub fn education_component(profile: &CandidateProfile, required_education: &[String]) -> f64 {
    if required_education.is_empty() {
        return 100.0;
    }
    let degrees: Vec<String> = profile
        .education
        .iter()
        .map(|e| e.degree.to_lowercase())
        .collect();
    let matched = required_education
        .iter()
        .filter(|required| {
            let needle = required.to_lowercase();
            degrees.iter().any(|degree| degree.contains(&needle))
        })
        .count();
    matched as f64 / required_education.len() as f64 * 100.0
}

/// Combined 0–100 score. Returns 0 immediately when the mandatory gate
/// fails, regardless of every other component.
pub fn score(profile: &CandidateProfile, job: &JobPosting, config: &MatchingConfig) -> u32 {
    if !mandatory_skills_met(profile, &config.mandatory_skills) {
        return 0;
    }

    let w = &config.weights;
    let skill = skill_component(profile, job) * (w.mandatory + w.optional) as f64 / 100.0;
    let experience = experience_component(profile.experience.len(), config.min_experience_years)
        * w.experience as f64
        / 100.0;
    let education =
        education_component(profile, &config.required_education) * w.education as f64 / 100.0;

    let total = skill + experience + education;
    (total.round() as u32).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{Education, Experience, Skill, SkillLevel};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn make_skill(name: &str, level: SkillLevel) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            project_used: true,
            weight: 0.9,
        }
    }

    fn make_experience(company: &str) -> Experience {
        Experience {
            company: company.to_string(),
            position: "Software Developer".to_string(),
            duration: "2020-2023".to_string(),
            description: "Software development and maintenance".to_string(),
            technologies: vec!["JavaScript".to_string()],
        }
    }

    fn make_profile(skills: Vec<Skill>, experience: Vec<Experience>) -> CandidateProfile {
        CandidateProfile {
            name: "Test Candidate".to_string(),
            email: "candidate@example.com".to_string(),
            phone: "+1-555-0100".to_string(),
            address: "123 Main St".to_string(),
            linkedin: None,
            github: None,
            personal_website: None,
            skills,
            experience,
            education: vec![Education {
                degree: "Bachelor of Computer Science".to_string(),
                institution: "University".to_string(),
                year: "2020".to_string(),
                gpa: None,
            }],
        }
    }

    fn make_job(requirements: Vec<&str>, preferred: Vec<&str>) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Frontend Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Build things".to_string(),
            requirements: requirements.into_iter().map(String::from).collect(),
            preferred_skills: preferred.into_iter().map(String::from).collect(),
            upload_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            file_name: "job.txt".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_mandatory_skill_gates_to_zero() {
        let profile = make_profile(
            vec![
                make_skill("JavaScript", SkillLevel::Advanced),
                make_skill("React", SkillLevel::Expert),
            ],
            vec![make_experience("Acme")],
        );
        let job = make_job(vec!["JavaScript", "React", "CSS"], vec![]);
        let mut config = MatchingConfig::default();
        config.mandatory_skills = vec!["Python".to_string()];

        assert_eq!(score(&profile, &job, &config), 0);
    }

    #[test]
    fn test_mandatory_gate_is_substring_containment() {
        let profile = make_profile(vec![make_skill("JavaScript", SkillLevel::Advanced)], vec![]);
        // "Java" is contained in "javascript", so the gate passes.
        assert!(mandatory_skills_met(&profile, &["Java".to_string()]));
        assert!(!mandatory_skills_met(&profile, &["Rust".to_string()]));
    }

    #[test]
    fn test_empty_mandatory_list_always_passes() {
        let profile = make_profile(vec![], vec![]);
        assert!(mandatory_skills_met(&profile, &[]));
    }

    #[test]
    fn test_skill_component_counts_matches_over_union() {
        let profile = make_profile(
            vec![
                make_skill("JavaScript", SkillLevel::Advanced),
                make_skill("React", SkillLevel::Expert),
            ],
            vec![],
        );
        let job = make_job(vec!["JavaScript", "React", "CSS"], vec![]);
        let component = skill_component(&profile, &job);
        assert!((component - 200.0 / 3.0).abs() < 1e-9, "got {component}");
    }

    #[test]
    fn test_skill_component_empty_job_list_is_zero() {
        let profile = make_profile(vec![make_skill("JavaScript", SkillLevel::Advanced)], vec![]);
        let job = make_job(vec![], vec![]);
        assert_eq!(skill_component(&profile, &job), 0.0);
    }

    #[test]
    fn test_skill_component_counts_duplicates_literally() {
        let profile = make_profile(vec![make_skill("React", SkillLevel::Expert)], vec![]);
        // "React" appears in both lists: 2 matches out of 3 entries.
        let job = make_job(vec!["React", "CSS"], vec!["React"]);
        let component = skill_component(&profile, &job);
        assert!((component - 200.0 / 3.0).abs() < 1e-9, "got {component}");
    }

    #[test]
    fn test_experience_meets_minimum() {
        // 3 roles ≈ 6 years, minimum 5 → satisfied.
        assert_eq!(experience_component(3, 5), 100.0);
    }

    #[test]
    fn test_experience_below_minimum_is_proportional() {
        // 1 role ≈ 2 years, minimum 10 → 20.
        assert_eq!(experience_component(1, 10), 20.0);
    }

    #[test]
    fn test_experience_zero_minimum_is_trivially_satisfied() {
        assert_eq!(experience_component(0, 0), 100.0);
    }

    #[test]
    fn test_education_no_requirement_is_100() {
        let profile = make_profile(vec![], vec![]);
        assert_eq!(education_component(&profile, &[]), 100.0);
    }

    #[test]
    fn test_education_substring_match_on_degree() {
        let profile = make_profile(vec![], vec![]);
        // "computer science" is contained in "bachelor of computer science".
        assert_eq!(
            education_component(&profile, &["Computer Science".to_string()]),
            100.0
        );
        assert_eq!(education_component(&profile, &["PhD".to_string()]), 0.0);
    }

    #[test]
    fn test_education_partial_requirement_coverage() {
        let profile = make_profile(vec![], vec![]);
        let required = vec!["Computer Science".to_string(), "Mathematics".to_string()];
        assert_eq!(education_component(&profile, &required), 50.0);
    }

    #[test]
    fn test_default_weights_worked_example_rounds_to_77() {
        // skills 2/3 → 66.67 × 0.70, experience 100 × 0.20, education 100 × 0.10
        // = 46.67 + 20 + 10 = 76.67 → 77.
        let profile = make_profile(
            vec![
                make_skill("JavaScript", SkillLevel::Advanced),
                make_skill("React", SkillLevel::Expert),
            ],
            vec![],
        );
        let job = make_job(vec!["JavaScript", "React", "CSS"], vec![]);
        let config = MatchingConfig::default();

        assert_eq!(score(&profile, &job, &config), 77);
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let profile = make_profile(
            vec![make_skill("JavaScript", SkillLevel::Advanced)],
            vec![make_experience("Acme"), make_experience("Globex")],
        );
        let job = make_job(vec!["JavaScript"], vec![]);
        let config = MatchingConfig::default();

        let result = score(&profile, &job, &config);
        assert!(result <= 100, "got {result}");
        assert_eq!(result, 100);
    }

    #[test]
    fn test_score_zero_candidate_against_empty_job() {
        // No job skills → skill component 0; default config leaves
        // experience and education at 100.
        let profile = make_profile(vec![], vec![]);
        let job = make_job(vec![], vec![]);
        let config = MatchingConfig::default();

        // 0 × 0.70 + 100 × 0.20 + 100 × 0.10 = 30.
        assert_eq!(score(&profile, &job, &config), 30);
    }

    #[test]
    fn test_gate_overrides_strong_components() {
        let profile = make_profile(
            vec![
                make_skill("JavaScript", SkillLevel::Expert),
                make_skill("React", SkillLevel::Expert),
            ],
            vec![make_experience("Acme"); 5],
        );
        let job = make_job(vec!["JavaScript", "React"], vec![]);
        let mut config = MatchingConfig::default();
        assert!(score(&profile, &job, &config) > 0);

        config.mandatory_skills = vec!["Haskell".to_string()];
        assert_eq!(score(&profile, &job, &config), 0);
    }
}
