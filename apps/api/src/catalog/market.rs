use crate::models::market::MarketDemandEntry;

pub const MARKET_DEMAND: &[MarketDemandEntry] = &[
    MarketDemandEntry {
        skill_name: "JavaScript",
        demand_score: 95,
        avg_salary: 85_000,
        job_postings: 15_420,
        growth_rate: 8.2,
        top_companies: &["Google", "Microsoft", "Amazon", "Meta", "Netflix"],
        location_demand: &[
            ("San Francisco", 98),
            ("New York", 92),
            ("Seattle", 89),
            ("Austin", 85),
        ],
    },
    MarketDemandEntry {
        skill_name: "Python",
        demand_score: 92,
        avg_salary: 95_000,
        job_postings: 12_350,
        growth_rate: 11.5,
        top_companies: &["Google", "Tesla", "Spotify", "Uber", "Airbnb"],
        location_demand: &[
            ("San Francisco", 95),
            ("New York", 88),
            ("Boston", 91),
            ("Seattle", 87),
        ],
    },
    MarketDemandEntry {
        skill_name: "Machine Learning",
        demand_score: 88,
        avg_salary: 120_000,
        job_postings: 8_920,
        growth_rate: 15.3,
        top_companies: &["OpenAI", "Google", "Microsoft", "NVIDIA", "Amazon"],
        location_demand: &[
            ("San Francisco", 96),
            ("Seattle", 92),
            ("Boston", 89),
            ("New York", 86),
        ],
    },
];

/// Generic statistics reported for any skill missing from `MARKET_DEMAND`.
/// `skill_name` is replaced by the caller's input.
pub const DEFAULT_MARKET_DEMAND: MarketDemandEntry = MarketDemandEntry {
    skill_name: "",
    demand_score: 70,
    avg_salary: 75_000,
    job_postings: 5_000,
    growth_rate: 6.5,
    top_companies: &["Various Tech Companies"],
    location_demand: &[("Major Cities", 75)],
};

pub fn market_entry(skill: &str) -> Option<&'static MarketDemandEntry> {
    MARKET_DEMAND.iter().find(|entry| entry.skill_name == skill)
}
