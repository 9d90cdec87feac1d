use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Static catalog records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

/// One row of a profile's weight table. Weights are direct multipliers, not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillWeight {
    pub skill: &'static str,
    pub weight: f64,
}

/// Long-form annotation shown on the career details card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerDetails {
    pub description: &'static str,
    pub companies: &'static [&'static str],
    pub locations: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub work_style: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerProfile {
    pub name: &'static str,
    pub required_skills: &'static [&'static str],
    /// Iterated in table order when scoring; gap/strength lists follow this order.
    pub weights: &'static [SkillWeight],
    pub salary_range: SalaryRange,
    pub growth_rate: f64,
    pub description: &'static str,
    pub details: Option<CareerDetails>,
}

impl CareerProfile {
    pub fn requires(&self, skill: &str) -> bool {
        self.required_skills.iter().any(|required| *required == skill)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Computed results
// ────────────────────────────────────────────────────────────────────────────

/// Fit between one user's skills and one career profile. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career_path: String,
    /// Percentage-like; exceeds 100 when bonus skills are plentiful.
    pub match_score: i32,
    pub skill_gaps: Vec<String>,
    pub strengths: Vec<String>,
}

/// Display bucket for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    NeedsDevelopment,
}

impl MatchTier {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => MatchTier::Excellent,
            s if s >= 60 => MatchTier::Good,
            s if s >= 40 => MatchTier::Fair,
            _ => MatchTier::NeedsDevelopment,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
            MatchTier::NeedsDevelopment => "Needs Development",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MatchTier::from_score(80), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(79), MatchTier::Good);
        assert_eq!(MatchTier::from_score(60), MatchTier::Good);
        assert_eq!(MatchTier::from_score(59), MatchTier::Fair);
        assert_eq!(MatchTier::from_score(40), MatchTier::Fair);
        assert_eq!(MatchTier::from_score(39), MatchTier::NeedsDevelopment);
    }

    #[test]
    fn test_tier_handles_out_of_range_scores() {
        assert_eq!(MatchTier::from_score(145), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(-20), MatchTier::NeedsDevelopment);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(MatchTier::Excellent.label(), "Excellent Match");
        assert_eq!(MatchTier::NeedsDevelopment.label(), "Needs Development");
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        let json = serde_json::to_string(&MatchTier::NeedsDevelopment).unwrap();
        assert_eq!(json, "\"needs_development\"");
    }
}
