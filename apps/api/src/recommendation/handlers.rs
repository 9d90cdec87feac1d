//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::career_profile;
use crate::errors::AppError;
use crate::models::career::CareerProfile;
use crate::models::learning::LearningResource;
use crate::models::market::MarketDemandRecord;
use crate::models::skill::SkillInput;
use crate::recommendation::learning_path::{generate_learning_path, total_duration_hours};
use crate::recommendation::market_demand::predict_market_demand;
use crate::recommendation::pipeline::{
    dashboard_summary, recommend, recommend_for, DashboardSummary, RankedCareer,
    RecommendationReport,
};
use crate::state::AppState;

const MAX_PROFICIENCY: i32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub skills: Vec<SkillInput>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<RankedCareer>,
    pub scorer_backend: String,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub skill_gaps: Vec<String>,
    pub current_level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub resources: Vec<LearningResource>,
    pub total_hours: u32,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub skills: Vec<SkillInput>,
    /// Plan for this career instead of the top match.
    pub career: Option<String>,
    pub current_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    pub skills: Vec<SkillInput>,
    pub top_n: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/careers/matches
///
/// Ranks every career profile against the submitted skills.
pub async fn handle_career_matches(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    validate_skills(&request.skills)?;

    let matches = state
        .scorer
        .rank(&request.skills)
        .into_iter()
        .map(RankedCareer::from)
        .collect();

    Ok(Json(MatchResponse {
        matches,
        scorer_backend: state.scorer.backend().to_string(),
    }))
}

/// GET /api/v1/careers/:name
///
/// Returns the static profile for one career, including its detail annotation if any.
pub async fn handle_career_details(
    Path(name): Path<String>,
) -> Result<Json<&'static CareerProfile>, AppError> {
    career_profile(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career '{name}' not found")))
}

/// POST /api/v1/learning-path
///
/// Expands skill gaps into learning resources. Unknown gaps are skipped, not rejected.
pub async fn handle_learning_path(
    State(state): State<AppState>,
    Json(request): Json<LearningPathRequest>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let level = request
        .current_level
        .as_deref()
        .unwrap_or(state.config.default_learning_level.as_str());

    let resources = generate_learning_path(&request.skill_gaps, level);
    let total_hours = total_duration_hours(&resources);

    Ok(Json(LearningPathResponse {
        resources,
        total_hours,
    }))
}

/// GET /api/v1/market-demand/:skill
pub async fn handle_market_demand(Path(skill): Path<String>) -> Json<MarketDemandRecord> {
    Json(predict_market_demand(&skill))
}

/// POST /api/v1/recommendations
///
/// Full pipeline: rank careers → select (top match or `career`) → learning plan.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationReport>, AppError> {
    validate_skills(&request.skills)?;

    let level = request
        .current_level
        .as_deref()
        .unwrap_or(state.config.default_learning_level.as_str());

    let report = match request.career.as_deref() {
        Some(career) => recommend_for(state.scorer.as_ref(), &request.skills, career, level)
            .ok_or_else(|| AppError::NotFound(format!("Career '{career}' not found")))?,
        None => recommend(state.scorer.as_ref(), &request.skills, level),
    };

    Ok(Json(report))
}

/// POST /api/v1/dashboard
///
/// Top matches plus market statistics for each submitted skill.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Json(request): Json<DashboardRequest>,
) -> Result<Json<DashboardSummary>, AppError> {
    validate_skills(&request.skills)?;

    let top_n = request.top_n.unwrap_or(state.config.dashboard_top_n);
    Ok(Json(dashboard_summary(
        state.scorer.as_ref(),
        &request.skills,
        top_n,
    )))
}

/// The engine scores whatever it is given; the HTTP boundary rejects what a UI should never send.
fn validate_skills(skills: &[SkillInput]) -> Result<(), AppError> {
    for skill in skills {
        if skill.name.trim().is_empty() {
            return Err(AppError::Validation("skill name cannot be empty".to_string()));
        }
        if !(0..=MAX_PROFICIENCY).contains(&skill.proficiency) {
            return Err(AppError::Validation(format!(
                "proficiency for '{}' must be between 0 and {MAX_PROFICIENCY}, got {}",
                skill.name, skill.proficiency
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        let skills = vec![SkillInput::new("Python", 0), SkillInput::new("SQL", 10)];
        assert!(validate_skills(&skills).is_ok());
        assert!(validate_skills(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = validate_skills(&[SkillInput::new("Python", 11)]).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Python")));
        assert!(validate_skills(&[SkillInput::new("Python", -1)]).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert!(validate_skills(&[SkillInput::new("   ", 5)]).is_err());
    }
}
