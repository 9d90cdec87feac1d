// Recommendation Engine
// Implements: career matching, learning path generation, market demand lookup,
// and the pipeline that chains them for the UI.
// Pure functions over the static catalog; no I/O below the handlers.

pub mod handlers;
pub mod learning_path;
pub mod market_demand;
pub mod matcher;
pub mod pipeline;

pub use learning_path::{generate_learning_path, total_duration_hours};
pub use market_demand::predict_market_demand;
pub use matcher::{calculate_career_matches, CareerScorer, WeightedCareerScorer};
pub use pipeline::{dashboard_summary, recommend, recommend_for};
