// src/export.rs
//! CSV download of a single snapshot mapping.

use crate::error::DashboardError;
use crate::snapshot::{MetricSnapshot, Series};
use anyhow::{Context, Result};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Cities,
    States,
    Companies,
    Skills,
    Roles,
    Seniority,
    SalaryBySeniority,
    SalaryByRole,
}

impl Dataset {
    pub const ALL: [Dataset; 8] = [
        Dataset::Cities,
        Dataset::States,
        Dataset::Companies,
        Dataset::Skills,
        Dataset::Roles,
        Dataset::Seniority,
        Dataset::SalaryBySeniority,
        Dataset::SalaryByRole,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Cities => "cities",
            Dataset::States => "states",
            Dataset::Companies => "companies",
            Dataset::Skills => "skills",
            Dataset::Roles => "roles",
            Dataset::Seniority => "seniority",
            Dataset::SalaryBySeniority => "salary-by-seniority",
            Dataset::SalaryByRole => "salary-by-role",
        }
    }

    /// CSV column names: (label, value).
    pub fn columns(self) -> (&'static str, &'static str) {
        match self {
            Dataset::Cities => ("City", "Jobs"),
            Dataset::States => ("State", "Jobs"),
            Dataset::Companies => ("Company", "Openings"),
            Dataset::Skills => ("Skill", "Jobs"),
            Dataset::Roles => ("Role", "Count"),
            Dataset::Seniority => ("Level", "Count"),
            Dataset::SalaryBySeniority => ("Level", "Average (LPA)"),
            Dataset::SalaryByRole => ("Role", "Average (LPA)"),
        }
    }

    /// Rows of the mapping in authored order.
    pub fn rows(self, snapshot: &MetricSnapshot) -> Vec<Row> {
        let counts = |series: &Series<u32>| -> Vec<Row> {
            series
                .iter()
                .map(|(label, n)| Row {
                    label,
                    value: f64::from(n),
                })
                .collect()
        };
        let averages = |series: &Series<f64>| -> Vec<Row> {
            series
                .iter()
                .map(|(label, value)| Row { label, value })
                .collect()
        };
        match self {
            Dataset::Cities => counts(&snapshot.cities),
            Dataset::States => counts(&snapshot.states),
            Dataset::Companies => counts(&snapshot.companies),
            Dataset::Skills => counts(&snapshot.skills),
            Dataset::Roles => counts(&snapshot.roles),
            Dataset::Seniority => counts(&snapshot.seniority),
            Dataset::SalaryBySeniority => averages(&snapshot.salary.by_seniority),
            Dataset::SalaryByRole => averages(&snapshot.salary.by_role),
        }
    }
}

impl FromStr for Dataset {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Dataset::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| DashboardError::UnknownDataset(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub value: f64,
}

/// Two-column CSV with a header row.
pub fn to_csv(dataset: Dataset, snapshot: &MetricSnapshot) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let (label_col, value_col) = dataset.columns();
    writer
        .write_record([label_col, value_col])
        .context("Failed to write CSV header")?;

    for row in dataset.rows(snapshot) {
        writer
            .write_record([row.label.to_string(), format_value(row.value)])
            .with_context(|| format!("Failed to write CSV row for {}", row.label))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Counts print as integers, averages keep one decimal.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() >= 1.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::snapshot;

    #[test]
    fn test_dataset_names_parse() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.name().parse::<Dataset>(), Ok(dataset));
        }
        assert_eq!("salary_by_role".parse::<Dataset>(), Ok(Dataset::SalaryByRole));
        assert!("weather".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_cities_csv() {
        let csv = to_csv(Dataset::Cities, snapshot()).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "City,Jobs");
        assert_eq!(lines[1], "Bangalore,845");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_salary_csv_keeps_one_decimal() {
        let csv = to_csv(Dataset::SalaryByRole, snapshot()).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Role,Average (LPA)");
        assert_eq!(lines[1], "Data Science/ML,18.1");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(845.0), "845");
        assert_eq!(format_value(4.8), "4.8");
        assert_eq!(format_value(90.0), "90");
    }
}
