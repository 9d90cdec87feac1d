//! Learning Resource Catalog, keyed by skill name. Resource order within a skill is significant.

use crate::models::learning::{LearningResource, ResourceType};

const fn r(
    title: &'static str,
    resource_type: ResourceType,
    duration_hours: u32,
    provider: &'static str,
) -> LearningResource {
    LearningResource {
        title,
        resource_type,
        duration_hours,
        provider,
    }
}

const LEARNING_RESOURCES: &[(&str, &[LearningResource])] = &[
    (
        "JavaScript",
        &[
            r("JavaScript Fundamentals", ResourceType::Course, 40, "FreeCodeCamp"),
            r("ES6+ Features", ResourceType::Tutorial, 15, "MDN"),
        ],
    ),
    (
        "Python",
        &[
            r("Python for Beginners", ResourceType::Course, 50, "Codecademy"),
            r("Data Structures in Python", ResourceType::Course, 30, "edX"),
        ],
    ),
    (
        "React",
        &[
            r("React Official Tutorial", ResourceType::Tutorial, 25, "React.dev"),
            r("Advanced React Patterns", ResourceType::Course, 35, "Pluralsight"),
        ],
    ),
    (
        "Machine Learning",
        &[
            r("ML Basics", ResourceType::Course, 60, "Coursera"),
            r("Practical ML Projects", ResourceType::Tutorial, 40, "Kaggle"),
        ],
    ),
    (
        "Design Thinking",
        &[
            r("Design Thinking Process", ResourceType::Course, 30, "IDEO"),
            r(
                "User-Centered Design",
                ResourceType::Tutorial,
                20,
                "Interaction Design Foundation",
            ),
        ],
    ),
];

/// Resources for one skill, empty when the skill has no catalog entry.
pub fn resources_for(skill: &str) -> &'static [LearningResource] {
    LEARNING_RESOURCES
        .iter()
        .find(|(key, _)| *key == skill)
        .map(|(_, resources)| *resources)
        .unwrap_or(&[])
}
