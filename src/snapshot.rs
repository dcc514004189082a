// src/snapshot.rs
//! Static job-market snapshot read by every view.
//!
//! All figures are transcribed constants. Nothing here is recomputed from a
//! larger source, so the record is built once per process and handed out as
//! a `&'static` reference.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::OnceLock;

/// Denominator used for every percentage-of-total shown on the dashboard.
pub const TOTAL_JOBS: u32 = 4665;

const LAST_UPDATED: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 1) {
    Some(date) => date,
    None => panic!("invalid snapshot date"),
};

static SNAPSHOT: OnceLock<MetricSnapshot> = OnceLock::new();

/// Process-wide snapshot, built on first access.
pub fn snapshot() -> &'static MetricSnapshot {
    SNAPSHOT.get_or_init(MetricSnapshot::load)
}

/// Ordered label -> value mapping. Authored order is preserved everywhere,
/// including JSON output.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V: Copy> Series<V> {
    pub fn new(entries: Vec<(&'static str, V)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == label)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, V)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Copy + Into<f64>> Series<V> {
    /// Values widened for charting.
    pub fn values_f64(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| (*value).into()).collect()
    }
}

impl<V: Serialize> Serialize for Series<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SalarySnapshot {
    /// Average disclosed salary, LPA.
    pub avg: f64,
    pub median: f64,
    pub highest: f64,
    pub by_seniority: Series<f64>,
    pub by_role: Series<f64>,
}

/// Where the numbers came from.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Coverage {
    pub source: &'static str,
    pub jobs_analyzed: u32,
    pub cities_covered: u32,
    pub salaries_disclosed: u32,
    pub last_updated: NaiveDate,
}

impl Coverage {
    /// "Dec 2025"
    pub fn last_updated_label(&self) -> String {
        self.last_updated.format("%b %Y").to_string()
    }

    /// Long form used in the footer, e.g. "December 2025".
    pub fn last_updated_long(&self) -> String {
        self.last_updated.format("%B %Y").to_string()
    }

    pub fn disclosure_rate(&self) -> f64 {
        percent_of(self.salaries_disclosed, self.jobs_analyzed)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MetricSnapshot {
    pub cities: Series<u32>,
    pub states: Series<u32>,
    pub companies: Series<u32>,
    pub skills: Series<u32>,
    pub roles: Series<u32>,
    pub seniority: Series<u32>,
    pub salary: SalarySnapshot,
    pub coverage: Coverage,
}

/// One skill with its share of all analyzed jobs.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SkillShare {
    pub skill: &'static str,
    pub jobs: u32,
    pub percentage: f64,
}

impl MetricSnapshot {
    fn load() -> Self {
        tracing::debug!("Building static metric snapshot");
        Self {
            cities: Series::new(vec![
                ("Bangalore", 845),
                ("Hyderabad", 790),
                ("Pune", 768),
                ("Mumbai", 758),
                ("Chennai", 683),
                ("Delhi", 450),
            ]),
            states: Series::new(vec![
                ("Maharashtra", 1526),
                ("Karnataka", 845),
                ("Telangana", 790),
                ("Tamil Nadu", 683),
                ("Delhi", 450),
            ]),
            companies: Series::new(vec![
                ("Amazon", 99),
                ("TCS", 98),
                ("JPMorgan", 68),
                ("Genpact", 63),
                ("Cognizant", 63),
                ("Microsoft", 33),
                ("IBM", 42),
            ]),
            skills: Series::new(vec![
                ("AI", 987),
                ("Python", 625),
                ("Cloud", 607),
                ("Machine Learning", 382),
                ("SQL", 264),
                ("AWS", 251),
                ("Data Science", 219),
                ("Azure", 203),
                ("Java", 153),
                ("ETL", 152),
                ("Agile", 125),
                ("DevOps", 121),
            ]),
            roles: Series::new(vec![
                ("Software Engineering", 1186),
                ("Data Science/ML", 538),
                ("Data Engineering", 437),
                ("Data Analytics", 356),
                ("DevOps/Cloud", 60),
                ("Other", 2083),
            ]),
            seniority: Series::new(vec![
                ("Mid-Level", 2751),
                ("Senior", 1726),
                ("Junior", 183),
            ]),
            salary: SalarySnapshot {
                avg: 15.6,
                median: 13.5,
                highest: 90.0,
                by_seniority: Series::new(vec![
                    ("Junior", 4.8),
                    ("Mid-Level", 14.3),
                    ("Senior", 19.7),
                ]),
                by_role: Series::new(vec![
                    ("Data Science/ML", 18.1),
                    ("Data Engineering", 16.9),
                    ("Software Engineering", 12.9),
                    ("Data Analytics", 12.7),
                ]),
            },
            coverage: Coverage {
                source: "Adzuna API",
                jobs_analyzed: TOTAL_JOBS,
                cities_covered: 76,
                salaries_disclosed: 551,
                last_updated: LAST_UPDATED,
            },
        }
    }

    /// Percentage share of every skill, in authored order.
    pub fn skill_shares(&self) -> Vec<SkillShare> {
        self.skills
            .iter()
            .map(|(skill, jobs)| SkillShare {
                skill,
                jobs,
                percentage: skill_share(jobs),
            })
            .collect()
    }
}

/// `round(count / 4665 * 100, 1)`
pub fn skill_share(count: u32) -> f64 {
    percent_of(count, TOTAL_JOBS)
}

/// Percentage rounded to one decimal place.
pub fn percent_of(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(count) / f64::from(total) * 100.0 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_share_rounding() {
        assert_eq!(skill_share(987), 21.2);
        assert_eq!(skill_share(625), 13.4);
        assert_eq!(skill_share(251), 5.4);
        assert_eq!(skill_share(0), 0.0);
    }

    #[test]
    fn test_skill_shares_cover_every_skill() {
        let snap = snapshot();
        let shares = snap.skill_shares();
        assert_eq!(shares.len(), snap.skills.len());
        for share in &shares {
            let expected = (f64::from(share.jobs) / 4665.0 * 100.0 * 10.0).round() / 10.0;
            assert_eq!(share.percentage, expected, "skill {}", share.skill);
        }
        assert_eq!(shares[0].skill, "AI");
    }

    #[test]
    fn test_snapshot_is_cached() {
        let first = snapshot() as *const MetricSnapshot;
        let second = snapshot() as *const MetricSnapshot;
        assert_eq!(first, second);
    }

    #[test]
    fn test_series_lookup_and_order() {
        let snap = snapshot();
        assert_eq!(snap.cities.get("Pune"), Some(768));
        assert_eq!(snap.cities.get("Kolkata"), None);
        assert_eq!(
            snap.seniority.labels(),
            vec!["Mid-Level", "Senior", "Junior"]
        );
    }

    #[test]
    fn test_series_serializes_in_authored_order() {
        let json = serde_json::to_string(&snapshot().seniority).unwrap();
        assert_eq!(json, r#"{"Mid-Level":2751,"Senior":1726,"Junior":183}"#);
    }

    #[test]
    fn test_coverage_labels() {
        let coverage = &snapshot().coverage;
        assert_eq!(coverage.last_updated_label(), "Dec 2025");
        assert_eq!(coverage.last_updated_long(), "December 2025");
        assert_eq!(coverage.disclosure_rate(), 11.8);
    }
}
