//! Scoring configuration. The scorer itself never validates the weight
//! sum — `validate` is for the callers (config endpoint, inline overrides).

use serde::{Deserialize, Serialize};

/// Component weights, intended to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub mandatory: u32,
    pub optional: u32,
    pub experience: u32,
    pub education: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            mandatory: 40,
            optional: 30,
            experience: 20,
            education: 10,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> u32 {
        self.mandatory + self.optional + self.experience + self.education
    }
}

/// Global matching configuration. Empty lists mean "no requirement",
/// never a missing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub weights: ScoreWeights,
    /// Skills whose absence forces a candidate's score to 0, independent
    /// of any per-job requirement.
    pub mandatory_skills: Vec<String>,
    pub optional_skills: Vec<String>,
    pub min_experience_years: u32,
    pub required_education: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            mandatory_skills: Vec::new(),
            optional_skills: Vec::new(),
            min_experience_years: 0,
            required_education: Vec::new(),
        }
    }
}

impl MatchingConfig {
    /// Caller-side validation. Rejects weight sets that do not sum to 100.
    pub fn validate(&self) -> Result<(), String> {
        let sum = self.weights.sum();
        if sum != 100 {
            return Err(format!("score weights must sum to 100, got {sum}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_40_30_20_10() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.mandatory, 40);
        assert_eq!(weights.optional, 30);
        assert_eq!(weights.experience, 20);
        assert_eq!(weights.education, 10);
        assert_eq!(weights.sum(), 100);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(MatchingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let mut config = MatchingConfig::default();
        config.weights.mandatory = 50;
        let err = config.validate().unwrap_err();
        assert!(err.contains("110"), "unexpected message: {err}");
    }

    #[test]
    fn test_default_config_has_no_requirements() {
        let config = MatchingConfig::default();
        assert!(config.mandatory_skills.is_empty());
        assert!(config.required_education.is_empty());
        assert_eq!(config.min_experience_years, 0);
    }
}
