use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Level passed to the path generator when a request omits `current_level`.
    pub default_learning_level: String,
    /// Number of matches shown on the dashboard when a request omits `top_n`.
    pub dashboard_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_learning_level: "intermediate".to_string(),
            dashboard_top_n: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            default_learning_level: lookup("DEFAULT_LEARNING_LEVEL")
                .unwrap_or(defaults.default_learning_level),
            dashboard_top_n: match lookup("DASHBOARD_TOP_N") {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("DASHBOARD_TOP_N must be a count, got '{raw}'"))?,
                None => defaults.dashboard_top_n,
            },
        })
    }
}
