//! Recommendation pipeline: rank careers → select one → expand its gaps into a learning plan.
//!
//! All steps are synchronous and read only static tables, so handlers call them inline.

use serde::Serialize;
use tracing::info;

use crate::models::career::{CareerMatch, MatchTier};
use crate::models::learning::LearningResource;
use crate::models::market::MarketDemandRecord;
use crate::models::skill::SkillInput;
use crate::recommendation::learning_path::{generate_learning_path, total_duration_hours};
use crate::recommendation::market_demand::predict_market_demand;
use crate::recommendation::matcher::CareerScorer;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// A ranked match plus its display tier.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCareer {
    #[serde(flatten)]
    pub career: CareerMatch,
    pub tier: MatchTier,
    pub tier_label: &'static str,
}

impl From<CareerMatch> for RankedCareer {
    fn from(career: CareerMatch) -> Self {
        let tier = MatchTier::from_score(career.match_score);
        Self {
            career,
            tier,
            tier_label: tier.label(),
        }
    }
}

/// Learning resources that close the gaps of one selected career.
#[derive(Debug, Clone, Serialize)]
pub struct LearningPlan {
    pub career_path: String,
    pub current_level: String,
    pub resources: Vec<LearningResource>,
    pub total_hours: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub matches: Vec<RankedCareer>,
    /// None only when the scorer returned no matches.
    pub selected: Option<LearningPlan>,
    pub scorer_backend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub top_matches: Vec<RankedCareer>,
    /// One record per input skill, in input order.
    pub market_insights: Vec<MarketDemandRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Ranks every career and builds a learning plan for the top match.
pub fn recommend(
    scorer: &dyn CareerScorer,
    skills: &[SkillInput],
    current_level: &str,
) -> RecommendationReport {
    let matches = scorer.rank(skills);
    let selected = matches
        .first()
        .map(|top| build_plan(top, current_level));

    finish_report(scorer, matches, selected)
}

/// Same as [`recommend`] but plans for a caller-chosen career.
/// Returns `None` when `career` is not among the ranked matches.
pub fn recommend_for(
    scorer: &dyn CareerScorer,
    skills: &[SkillInput],
    career: &str,
    current_level: &str,
) -> Option<RecommendationReport> {
    let matches = scorer.rank(skills);
    let chosen = matches.iter().find(|m| m.career_path == career)?;
    let selected = Some(build_plan(chosen, current_level));

    Some(finish_report(scorer, matches, selected))
}

/// Top `top_n` matches plus market statistics for each supplied skill.
pub fn dashboard_summary(
    scorer: &dyn CareerScorer,
    skills: &[SkillInput],
    top_n: usize,
) -> DashboardSummary {
    let top_matches = scorer
        .rank(skills)
        .into_iter()
        .take(top_n)
        .map(RankedCareer::from)
        .collect();

    let market_insights = skills
        .iter()
        .map(|skill| predict_market_demand(&skill.name))
        .collect();

    DashboardSummary {
        top_matches,
        market_insights,
    }
}

pub fn build_plan(career: &CareerMatch, current_level: &str) -> LearningPlan {
    let resources = generate_learning_path(&career.skill_gaps, current_level);
    LearningPlan {
        career_path: career.career_path.clone(),
        current_level: current_level.to_string(),
        total_hours: total_duration_hours(&resources),
        resources,
    }
}

fn finish_report(
    scorer: &dyn CareerScorer,
    matches: Vec<CareerMatch>,
    selected: Option<LearningPlan>,
) -> RecommendationReport {
    if let Some(plan) = &selected {
        info!(
            career = %plan.career_path,
            resources = plan.resources.len(),
            total_hours = plan.total_hours,
            "built learning plan"
        );
    }

    RecommendationReport {
        matches: matches.into_iter().map(RankedCareer::from).collect(),
        selected,
        scorer_backend: scorer.backend().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::matcher::WeightedCareerScorer;

    fn demo_skills() -> Vec<SkillInput> {
        [
            ("JavaScript", 8),
            ("Python", 6),
            ("React", 7),
            ("SQL", 5),
            ("Communication", 8),
            ("Problem Solving", 9),
        ]
        .into_iter()
        .map(|(name, level)| SkillInput::new(name, level))
        .collect()
    }

    /// Scorer that never returns anything, to exercise the empty branch.
    struct EmptyScorer;

    impl CareerScorer for EmptyScorer {
        fn rank(&self, _skills: &[SkillInput]) -> Vec<CareerMatch> {
            Vec::new()
        }

        fn backend(&self) -> &'static str {
            "empty"
        }
    }

    #[test]
    fn test_recommend_selects_top_match() {
        let report = recommend(&WeightedCareerScorer::default(), &demo_skills(), "intermediate");
        let plan = report.selected.expect("top match should be selected");
        assert_eq!(plan.career_path, "Software Engineer");
        // Node.js is the only gap and has no catalog resources
        assert!(plan.resources.is_empty());
        assert_eq!(plan.total_hours, 0);
        assert_eq!(plan.current_level, "intermediate");
        assert_eq!(report.scorer_backend, "weighted");
    }

    #[test]
    fn test_recommend_attaches_tiers() {
        let report = recommend(&WeightedCareerScorer::default(), &demo_skills(), "intermediate");
        let tiers: Vec<MatchTier> = report.matches.iter().map(|m| m.tier).collect();
        assert_eq!(
            tiers,
            vec![
                MatchTier::Good,
                MatchTier::Fair,
                MatchTier::Fair,
                MatchTier::NeedsDevelopment,
                MatchTier::NeedsDevelopment,
            ]
        );
        assert_eq!(report.matches[0].tier_label, "Good Match");
    }

    #[test]
    fn test_recommend_for_selected_career() {
        let report = recommend_for(
            &WeightedCareerScorer::default(),
            &demo_skills(),
            "Data Scientist",
            "beginner",
        )
        .expect("known career");
        let plan = report.selected.expect("plan for chosen career");
        assert_eq!(plan.career_path, "Data Scientist");
        // gaps: Machine Learning, Statistics, R → only ML has resources
        let titles: Vec<&str> = plan.resources.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["ML Basics", "Practical ML Projects"]);
        assert_eq!(plan.total_hours, 100);
        assert_eq!(report.matches.len(), 5);
    }

    #[test]
    fn test_recommend_for_unknown_career_is_none() {
        let report = recommend_for(
            &WeightedCareerScorer::default(),
            &demo_skills(),
            "Astronaut",
            "beginner",
        );
        assert!(report.is_none());
    }

    #[test]
    fn test_recommend_with_no_matches() {
        let report = recommend(&EmptyScorer, &demo_skills(), "intermediate");
        assert!(report.matches.is_empty());
        assert!(report.selected.is_none());
        assert_eq!(report.scorer_backend, "empty");
    }

    #[test]
    fn test_dashboard_summary() {
        let skills = demo_skills();
        let summary = dashboard_summary(&WeightedCareerScorer::default(), &skills[..4], 3);
        let top: Vec<(&str, i32)> = summary
            .top_matches
            .iter()
            .map(|m| (m.career.career_path.as_str(), m.career.match_score))
            .collect();
        assert_eq!(
            top,
            vec![
                ("Software Engineer", 51),
                ("Data Scientist", 36),
                ("Cybersecurity Analyst", 22),
            ]
        );
        let names: Vec<&str> = summary
            .market_insights
            .iter()
            .map(|r| r.skill_name.as_str())
            .collect();
        assert_eq!(names, vec!["JavaScript", "Python", "React", "SQL"]);
        assert_eq!(summary.market_insights[2].demand_score, 70);
    }

    #[test]
    fn test_dashboard_top_n_larger_than_catalog() {
        let summary = dashboard_summary(&WeightedCareerScorer::default(), &[], 10);
        assert_eq!(summary.top_matches.len(), 5);
        assert!(summary.market_insights.is_empty());
    }

    #[test]
    fn test_ranked_career_serializes_flat() {
        let card = RankedCareer::from(CareerMatch {
            career_path: "UX Designer".to_string(),
            match_score: 25,
            skill_gaps: vec!["Figma".to_string()],
            strengths: vec![],
        });
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["career_path"], "UX Designer");
        assert_eq!(json["match_score"], 25);
        assert_eq!(json["tier"], "needs_development");
        assert_eq!(json["tier_label"], "Needs Development");
    }
}
