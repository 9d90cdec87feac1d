use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Market statistics for one skill, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDemandRecord {
    pub skill_name: String,
    pub demand_score: u32, // 0 – 100, advisory
    pub avg_salary: u32,
    pub job_postings: u32,
    pub growth_rate: f64,
    pub top_companies: Vec<String>,
    pub location_demand: BTreeMap<String, u32>,
}

/// Static table row backing a `MarketDemandRecord`.
#[derive(Debug, Clone, Copy)]
pub struct MarketDemandEntry {
    pub skill_name: &'static str,
    pub demand_score: u32,
    pub avg_salary: u32,
    pub job_postings: u32,
    pub growth_rate: f64,
    pub top_companies: &'static [&'static str],
    pub location_demand: &'static [(&'static str, u32)],
}

impl MarketDemandEntry {
    /// Materializes the row, reporting it under `skill_name`.
    pub fn to_record(&self, skill_name: &str) -> MarketDemandRecord {
        MarketDemandRecord {
            skill_name: skill_name.to_string(),
            demand_score: self.demand_score,
            avg_salary: self.avg_salary,
            job_postings: self.job_postings,
            growth_rate: self.growth_rate,
            top_companies: self.top_companies.iter().map(|c| c.to_string()).collect(),
            location_demand: self
                .location_demand
                .iter()
                .map(|(location, score)| (location.to_string(), *score))
                .collect(),
        }
    }
}
