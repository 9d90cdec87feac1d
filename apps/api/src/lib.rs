//! Career path recommendation engine.
//!
//! Ranks career profiles against self-reported skills, classifies strengths and gaps,
//! and maps gaps to learning resources. The `routes` module exposes the engine over HTTP.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod recommendation;
pub mod routes;
pub mod state;
