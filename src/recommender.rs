// src/recommender.rs
//! Hardcoded job recommendations.
//!
//! The three candidates are fixed. A user's skill list only decides whether
//! anything is returned and is echoed back as the "has" column; cities and
//! the salary floor are accepted but never narrow the list.

use crate::error::DashboardError;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// Skills offered by the profile multi-select.
pub const SKILL_VOCABULARY: [&str; 20] = [
    "Python",
    "Java",
    "JavaScript",
    "SQL",
    "Machine Learning",
    "Deep Learning",
    "AI",
    "Cloud",
    "AWS",
    "Azure",
    "GCP",
    "React",
    "Django",
    "Flask",
    "DevOps",
    "Docker",
    "Kubernetes",
    "Databricks",
    "Snowflake",
    "ETL",
];

pub const DEFAULT_SKILLS: [&str; 3] = ["Python", "SQL", "Machine Learning"];
pub const DEFAULT_PREFERRED_CITIES: [&str; 2] = ["Bangalore", "Pune"];

/// Minimum-salary slider bounds, LPA.
pub const MIN_SALARY_RANGE: RangeInclusive<u32> = 0..=50;
pub const DEFAULT_MIN_SALARY: u32 = 10;

/// Skills suggested next to the profile stats.
pub const RECOMMENDED_SKILLS: [&str; 4] = ["TensorFlow", "AWS/Azure", "Databricks", "Docker"];

/// Current widget values of the recommender form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub preferred_cities: Vec<String>,
    pub min_salary: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            preferred_cities: DEFAULT_PREFERRED_CITIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_salary: DEFAULT_MIN_SALARY,
        }
    }
}

impl UserProfile {
    pub fn new(skills: Vec<String>, preferred_cities: Vec<String>, min_salary: i64) -> Self {
        Self {
            skills,
            preferred_cities,
            min_salary: clamp_min_salary(min_salary),
        }
    }
}

/// Pins a raw slider value into `MIN_SALARY_RANGE`.
pub fn clamp_min_salary(raw: i64) -> u32 {
    let (lo, hi) = (*MIN_SALARY_RANGE.start(), *MIN_SALARY_RANGE.end());
    raw.clamp(i64::from(lo), i64::from(hi)) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationCandidate {
    pub title: &'static str,
    pub company: &'static str,
    pub city: &'static str,
    pub salary: &'static str,
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub has: Vec<String>,
    pub needs: Vec<&'static str>,
}

struct CandidateTemplate {
    title: &'static str,
    company: &'static str,
    city: &'static str,
    salary: &'static str,
    match_percent: u8,
    /// How many of the user's skills are echoed back.
    echoed_skills: usize,
    needs: &'static [&'static str],
}

const CANDIDATES: [CandidateTemplate; 3] = [
    CandidateTemplate {
        title: "Senior Data Scientist",
        company: "Amazon",
        city: "Bangalore",
        salary: "₹22.0 LPA",
        match_percent: 89,
        echoed_skills: 3,
        needs: &["TensorFlow", "AWS"],
    },
    CandidateTemplate {
        title: "ML Engineer",
        company: "Microsoft",
        city: "Hyderabad",
        salary: "₹25.0 LPA",
        match_percent: 85,
        echoed_skills: 2,
        needs: &["Azure", "Deep Learning"],
    },
    CandidateTemplate {
        title: "Data Engineer",
        company: "Cognizant",
        city: "Pune",
        salary: "₹18.0 LPA",
        match_percent: 78,
        echoed_skills: 2,
        needs: &["Databricks", "ETL"],
    },
];

impl CandidateTemplate {
    fn instantiate(&self, skills: &[String]) -> RecommendationCandidate {
        let echoed = self.echoed_skills.min(skills.len());
        RecommendationCandidate {
            title: self.title,
            company: self.company,
            city: self.city,
            salary: self.salary,
            match_percent: self.match_percent,
            has: skills[..echoed].to_vec(),
            needs: self.needs.to_vec(),
        }
    }
}

/// Answers a recommender submission.
pub fn recommend(profile: &UserProfile) -> Result<Vec<RecommendationCandidate>, DashboardError> {
    if profile.skills.is_empty() {
        debug!("Recommendation requested with no skills selected");
        return Err(DashboardError::EmptySkillSelection);
    }

    info!(
        skills = profile.skills.len(),
        preferred_cities = profile.preferred_cities.len(),
        min_salary = profile.min_salary,
        "Producing job recommendations"
    );

    Ok(CANDIDATES
        .iter()
        .map(|template| template.instantiate(&profile.skills))
        .collect())
}
