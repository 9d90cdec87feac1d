pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career matching
        .route(
            "/api/v1/careers/matches",
            post(handlers::handle_career_matches),
        )
        .route("/api/v1/careers/:name", get(handlers::handle_career_details))
        // Learning paths
        .route("/api/v1/learning-path", post(handlers::handle_learning_path))
        // Market insights
        .route(
            "/api/v1/market-demand/:skill",
            get(handlers::handle_market_demand),
        )
        // Pipelines for the career-paths screen and dashboard
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommendations),
        )
        .route("/api/v1/dashboard", post(handlers::handle_dashboard))
        .with_state(state)
}
