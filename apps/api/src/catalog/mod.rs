// Static knowledge base: career profiles, learning resources, market statistics.
// Loaded at compile time and never mutated, so every lookup is safe to share across threads.

pub mod careers;
pub mod market;
pub mod resources;

pub use careers::{career_profile, CAREER_CATALOG};
pub use market::{market_entry, DEFAULT_MARKET_DEMAND, MARKET_DEMAND};
pub use resources::resources_for;
