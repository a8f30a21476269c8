//! LLM prompt constants for the analysis path.

use crate::matching::config::MatchingConfig;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

/// Analysis prompt template. Placeholders are filled by
/// `build_analysis_prompt`. The response contract (score, skillMatches,
/// strengths, gaps) mirrors the locally computed result shape so the two
/// paths stay swappable.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this candidate against the job requirements and provide a detailed matching score and analysis.

CANDIDATE PROFILE:
Name: {candidate_name}
Skills: {candidate_skills}
Experience: {candidate_experience}
Education: {candidate_education}

JOB REQUIREMENTS:
Title: {job_title}
Company: {job_company}
Required Skills: {job_requirements}
Preferred Skills: {job_preferred_skills}
Description: {job_description}

SCORING CONFIGURATION:
- Mandatory Skills Weight: {weight_mandatory}%
- Optional Skills Weight: {weight_optional}%
- Experience Weight: {weight_experience}%
- Education Weight: {weight_education}%
- Mandatory Skills: {mandatory_skills}
- Minimum Experience: {min_experience} years

Please provide a JSON response with:
{
  "score": <number 0-100>,
  "skillMatches": [
    {
      "skill": "<skill name>",
      "candidateLevel": "<level>",
      "required": <boolean>,
      "match": <boolean>,
      "score": <number 0-100>
    }
  ],
  "strengths": ["<strength 1>", "<strength 2>", ...],
  "gaps": ["<gap 1>", "<gap 2>", ...]
}

Consider the weightage configuration and ensure mandatory skills are properly evaluated."#;

/// Renders the analysis prompt for one (candidate, job) pair.
pub fn build_analysis_prompt(
    profile: &CandidateProfile,
    job: &JobPosting,
    config: &MatchingConfig,
) -> String {
    let skills = profile
        .skills
        .iter()
        .map(|s| format!("{} ({})", s.name, s.level.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let experience = profile
        .experience
        .iter()
        .map(|e| format!("{} at {} ({})", e.position, e.company, e.duration))
        .collect::<Vec<_>>()
        .join("; ");
    let education = profile
        .education
        .iter()
        .map(|e| format!("{} from {} ({})", e.degree, e.institution, e.year))
        .collect::<Vec<_>>()
        .join("; ");

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{candidate_name}", &profile.name)
        .replace("{candidate_skills}", &skills)
        .replace("{candidate_experience}", &experience)
        .replace("{candidate_education}", &education)
        .replace("{job_title}", &job.title)
        .replace("{job_company}", &job.company)
        .replace("{job_requirements}", &job.requirements.join(", "))
        .replace("{job_preferred_skills}", &job.preferred_skills.join(", "))
        .replace("{job_description}", &job.description)
        .replace("{weight_mandatory}", &config.weights.mandatory.to_string())
        .replace("{weight_optional}", &config.weights.optional.to_string())
        .replace("{weight_experience}", &config.weights.experience.to_string())
        .replace("{weight_education}", &config.weights.education.to_string())
        .replace("{mandatory_skills}", &config.mandatory_skills.join(", "))
        .replace(
            "{min_experience}",
            &config.min_experience_years.to_string(),
        )
}
