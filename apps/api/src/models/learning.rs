use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Tutorial,
    Certification,
    Book,
}

/// A learning resource owned by exactly one skill key in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub title: &'static str,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub duration_hours: u32,
    pub provider: &'static str,
}
