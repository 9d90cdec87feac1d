//! Market Demand Lookup: static per-skill hiring statistics with a generic fallback.

use tracing::debug;

use crate::catalog::{market_entry, DEFAULT_MARKET_DEMAND};
use crate::models::market::MarketDemandRecord;

/// Case-sensitive lookup. Never fails: unknown skills get the default statistics
/// reported under the requested name.
pub fn predict_market_demand(skill_name: &str) -> MarketDemandRecord {
    match market_entry(skill_name) {
        Some(entry) => entry.to_record(entry.skill_name),
        None => {
            debug!(skill = skill_name, "no market data, using default record");
            DEFAULT_MARKET_DEMAND.to_record(skill_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skill() {
        let record = predict_market_demand("Python");
        assert_eq!(record.skill_name, "Python");
        assert_eq!(record.demand_score, 92);
        assert_eq!(record.avg_salary, 95_000);
        assert_eq!(record.job_postings, 12_350);
        assert_eq!(record.growth_rate, 11.5);
        assert_eq!(record.top_companies[1], "Tesla");
        assert_eq!(record.location_demand["Boston"], 91);
        assert_eq!(record.location_demand.len(), 4);
    }

    #[test]
    fn test_unknown_skill_keeps_input_name() {
        let record = predict_market_demand("Unknown Skill X");
        assert_eq!(record.skill_name, "Unknown Skill X");
        assert_eq!(record.demand_score, 70);
        assert_eq!(record.avg_salary, 75_000);
        assert_eq!(record.job_postings, 5_000);
        assert_eq!(record.growth_rate, 6.5);
        assert_eq!(record.top_companies, vec!["Various Tech Companies"]);
        assert_eq!(record.location_demand.get("Major Cities"), Some(&75));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let record = predict_market_demand("javascript");
        assert_eq!(record.skill_name, "javascript");
        assert_eq!(record.demand_score, 70);
    }

    #[test]
    fn test_empty_name_is_total() {
        let record = predict_market_demand("");
        assert_eq!(record.skill_name, "");
        assert_eq!(record.job_postings, 5_000);
    }
}
