use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::matcher::{CareerScorer, WeightedCareerScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable career scorer. Default: WeightedCareerScorer over the static catalog.
    pub scorer: Arc<dyn CareerScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(WeightedCareerScorer::default()),
        }
    }
}
