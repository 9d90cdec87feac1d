//! Path Generator: expands skill gaps into an ordered sequence of learning resources.

use tracing::debug;

use crate::catalog::resources_for;
use crate::models::learning::LearningResource;

/// Concatenates the catalog resources of every gap, in gap order.
///
/// Gaps without catalog entries contribute nothing; repeated gaps repeat their block.
/// `current_level` is accepted for callers that already track it but does not filter
/// the selection.
pub fn generate_learning_path(skill_gaps: &[String], current_level: &str) -> Vec<LearningResource> {
    let mut path = Vec::new();
    let mut uncovered = 0usize;

    for gap in skill_gaps {
        let resources = resources_for(gap);
        if resources.is_empty() {
            uncovered += 1;
        }
        path.extend_from_slice(resources);
    }

    debug!(
        gaps = skill_gaps.len(),
        uncovered,
        resources = path.len(),
        current_level,
        "generated learning path"
    );

    path
}

/// Total study time for a path, in hours.
pub fn total_duration_hours(resources: &[LearningResource]) -> u32 {
    resources.iter().map(|r| r.duration_hours).sum()
}
