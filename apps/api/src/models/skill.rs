use serde::{Deserialize, Serialize};

/// A self-reported skill. `proficiency` is expected in 0..=10, where 0 means "not held".
///
/// The engine does not bound-check proficiency; the HTTP layer does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInput {
    pub name: String,
    pub proficiency: i32,
}

impl SkillInput {
    pub fn new(name: impl Into<String>, proficiency: i32) -> Self {
        Self {
            name: name.into(),
            proficiency,
        }
    }
}
