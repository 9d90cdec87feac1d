//! Career Catalog: the five career profiles every scoring call ranks.
//!
//! Weights are used as direct multipliers. Software Engineer sums to 0.9, the rest to 1.0.

use crate::models::career::{CareerDetails, CareerProfile, SalaryRange, SkillWeight};

const fn w(skill: &'static str, weight: f64) -> SkillWeight {
    SkillWeight { skill, weight }
}

pub const CAREER_CATALOG: &[CareerProfile] = &[
    CareerProfile {
        name: "Software Engineer",
        required_skills: &["JavaScript", "Python", "React", "Node.js", "SQL"],
        weights: &[
            w("JavaScript", 0.25),
            w("Python", 0.2),
            w("React", 0.2),
            w("Node.js", 0.15),
            w("SQL", 0.1),
        ],
        salary_range: SalaryRange {
            min: 70_000,
            max: 150_000,
        },
        growth_rate: 8.5,
        description: "Design, develop, and maintain software applications",
        details: Some(CareerDetails {
            description: "Design, develop, and maintain software applications using various programming languages and frameworks.",
            companies: &["Google", "Microsoft", "Amazon", "Meta", "Netflix"],
            locations: &["San Francisco", "Seattle", "New York", "Austin"],
            requirements: &[
                "Bachelor's degree in CS or related field",
                "2+ years programming experience",
            ],
            work_style: "70% Remote opportunities",
        }),
    },
    CareerProfile {
        name: "Data Scientist",
        required_skills: &["Python", "Machine Learning", "Statistics", "SQL", "R"],
        weights: &[
            w("Python", 0.3),
            w("Machine Learning", 0.25),
            w("Statistics", 0.2),
            w("SQL", 0.15),
            w("R", 0.1),
        ],
        salary_range: SalaryRange {
            min: 80_000,
            max: 180_000,
        },
        growth_rate: 11.2,
        description: "Analyze complex data to help organizations make decisions",
        details: Some(CareerDetails {
            description: "Analyze complex data to help organizations make strategic business decisions using statistical methods and machine learning.",
            companies: &["Google", "Tesla", "Spotify", "Uber", "Airbnb"],
            locations: &["San Francisco", "Boston", "Seattle", "New York"],
            requirements: &[
                "Master's degree in Statistics/Math/CS",
                "Experience with ML tools",
            ],
            work_style: "60% Remote opportunities",
        }),
    },
    CareerProfile {
        name: "UX Designer",
        required_skills: &[
            "Design Thinking",
            "Figma",
            "User Research",
            "Prototyping",
            "HTML/CSS",
        ],
        weights: &[
            w("Design Thinking", 0.25),
            w("Figma", 0.2),
            w("User Research", 0.25),
            w("Prototyping", 0.2),
            w("HTML/CSS", 0.1),
        ],
        salary_range: SalaryRange {
            min: 65_000,
            max: 140_000,
        },
        growth_rate: 7.8,
        description: "Design user experiences for digital products",
        details: Some(CareerDetails {
            description: "Create intuitive and engaging user experiences for digital products through research, design, and testing.",
            companies: &["Apple", "Adobe", "Figma", "Spotify", "Airbnb"],
            locations: &["San Francisco", "New York", "Los Angeles", "Portland"],
            requirements: &[
                "Bachelor's in Design or related field",
                "Portfolio of UX work",
            ],
            work_style: "65% Remote opportunities",
        }),
    },
    CareerProfile {
        name: "Product Manager",
        required_skills: &[
            "Product Strategy",
            "Analytics",
            "Communication",
            "Agile",
            "Market Research",
        ],
        weights: &[
            w("Product Strategy", 0.25),
            w("Analytics", 0.2),
            w("Communication", 0.25),
            w("Agile", 0.15),
            w("Market Research", 0.15),
        ],
        salary_range: SalaryRange {
            min: 90_000,
            max: 200_000,
        },
        growth_rate: 9.1,
        description: "Oversee product development and strategy",
        details: None,
    },
    CareerProfile {
        name: "Cybersecurity Analyst",
        required_skills: &[
            "Network Security",
            "Python",
            "Risk Assessment",
            "Incident Response",
            "Compliance",
        ],
        weights: &[
            w("Network Security", 0.3),
            w("Python", 0.2),
            w("Risk Assessment", 0.2),
            w("Incident Response", 0.15),
            w("Compliance", 0.15),
        ],
        salary_range: SalaryRange {
            min: 75_000,
            max: 160_000,
        },
        growth_rate: 12.8,
        description: "Protect organizations from cyber threats",
        details: None,
    },
];

/// Exact-match (case-sensitive) profile lookup.
pub fn career_profile(name: &str) -> Option<&'static CareerProfile> {
    CAREER_CATALOG.iter().find(|profile| profile.name == name)
}
