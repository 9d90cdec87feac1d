//! Career Matcher: pluggable, trait-based scorer that ranks every career profile
//! against a user's self-reported skills.
//!
//! Default: `WeightedCareerScorer` (static weight tables, deterministic).
//! `AppState` holds an `Arc<dyn CareerScorer>`, chosen at startup.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::CAREER_CATALOG;
use crate::models::career::{CareerMatch, CareerProfile};
use crate::models::skill::SkillInput;

/// At or above this proficiency a required skill counts as a strength.
pub const STRENGTH_THRESHOLD: i32 = 7;
/// At or above this proficiency a non-required skill earns the bonus.
pub const BONUS_THRESHOLD: i32 = 6;
/// Flat raw-score increment per bonus skill. Uncapped.
pub const BONUS_PER_SKILL: f64 = 0.05;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks career profiles for a skill list. Implement this to swap backends without
/// touching handlers or the recommendation pipeline.
pub trait CareerScorer: Send + Sync {
    /// One entry per profile, sorted by descending score; ties keep catalog order.
    fn rank(&self, skills: &[SkillInput]) -> Vec<CareerMatch>;

    /// Short name surfaced in responses for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedCareerScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Weighted-sum scorer over a static profile table.
///
/// Per profile:
/// 1. proficiency lookup by name, last duplicate wins, absent → 0
/// 2. for each (skill, weight) in table order: 0 → gap, ≥7 → strength,
///    score += proficiency / 10 × weight
/// 3. +0.05 per input skill outside the required set with proficiency ≥6
/// 4. match_score = round(score × 100), no clamping
pub struct WeightedCareerScorer {
    profiles: &'static [CareerProfile],
}

impl WeightedCareerScorer {
    pub fn new(profiles: &'static [CareerProfile]) -> Self {
        Self { profiles }
    }
}

impl Default for WeightedCareerScorer {
    fn default() -> Self {
        Self::new(CAREER_CATALOG)
    }
}

impl CareerScorer for WeightedCareerScorer {
    fn rank(&self, skills: &[SkillInput]) -> Vec<CareerMatch> {
        rank_profiles(self.profiles, skills)
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

/// Ranks the built-in career catalog.
pub fn calculate_career_matches(skills: &[SkillInput]) -> Vec<CareerMatch> {
    rank_profiles(CAREER_CATALOG, skills)
}

// ────────────────────────────────────────────────────────────────────────────
// Core weighted algorithm
// ────────────────────────────────────────────────────────────────────────────

fn rank_profiles(profiles: &[CareerProfile], skills: &[SkillInput]) -> Vec<CareerMatch> {
    let proficiency = proficiency_lookup(skills);

    let mut matches: Vec<CareerMatch> = profiles
        .iter()
        .map(|profile| score_profile(profile, &proficiency, skills))
        .collect();

    // sort_by is stable: equal scores keep catalog order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    debug!(
        skills = skills.len(),
        profiles = matches.len(),
        top = matches.first().map(|m| m.career_path.as_str()).unwrap_or(""),
        "ranked career matches"
    );

    matches
}

/// Name → proficiency. Built in input order so a repeated name keeps its last value.
fn proficiency_lookup(skills: &[SkillInput]) -> HashMap<&str, i32> {
    skills
        .iter()
        .map(|skill| (skill.name.as_str(), skill.proficiency))
        .collect()
}

fn score_profile(
    profile: &CareerProfile,
    proficiency: &HashMap<&str, i32>,
    skills: &[SkillInput],
) -> CareerMatch {
    let mut skill_gaps = Vec::new();
    let mut strengths = Vec::new();
    let mut total_score = 0.0_f64;

    for entry in profile.weights {
        let level = proficiency.get(entry.skill).copied().unwrap_or(0);

        // 1–6 is neither a gap nor a strength
        if level == 0 {
            skill_gaps.push(entry.skill.to_string());
        } else if level >= STRENGTH_THRESHOLD {
            strengths.push(entry.skill.to_string());
        }

        total_score += (f64::from(level) / 10.0) * entry.weight;
    }

    // Counted over the raw input list, not the deduplicated lookup.
    let bonus_skills = skills
        .iter()
        .filter(|skill| !profile.requires(&skill.name) && skill.proficiency >= BONUS_THRESHOLD)
        .count();
    total_score += bonus_skills as f64 * BONUS_PER_SKILL;

    CareerMatch {
        career_path: profile.name.to_string(),
        match_score: to_percentage(total_score),
        skill_gaps,
        strengths,
    }
}

/// Scales to a percentage and rounds half-up.
fn to_percentage(raw: f64) -> i32 {
    (raw * 100.0 + 0.5).floor() as i32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
