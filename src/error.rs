// src/error.rs
use thiserror::Error;

/// Failures a dashboard user can trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Please select at least one skill!")]
    EmptySkillSelection,

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
}

impl DashboardError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::EmptySkillSelection => "NO_SKILLS_SELECTED",
            DashboardError::UnknownSection(_) => "UNKNOWN_SECTION",
            DashboardError::UnknownDataset(_) => "UNKNOWN_DATASET",
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            DashboardError::EmptySkillSelection => vec![
                "Pick one or more skills from the list".to_string(),
                "Python, SQL and Machine Learning are a good start".to_string(),
            ],
            DashboardError::UnknownSection(_) => vec![format!(
                "Use one of: {}",
                crate::views::Section::ALL
                    .iter()
                    .map(|s| s.slug())
                    .collect::<Vec<_>>()
                    .join(", ")
            )],
            DashboardError::UnknownDataset(_) => vec![format!(
                "Use one of: {}",
                crate::export::Dataset::ALL
                    .iter()
                    .map(|d| d.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            DashboardError::EmptySkillSelection.error_code(),
            "NO_SKILLS_SELECTED"
        );
        assert_eq!(
            DashboardError::UnknownSection("x".into()).error_code(),
            "UNKNOWN_SECTION"
        );
        assert_eq!(
            DashboardError::EmptySkillSelection.to_string(),
            "Please select at least one skill!"
        );
    }

    #[test]
    fn test_unknown_section_suggests_slugs() {
        let suggestions = DashboardError::UnknownSection("jobs".into()).suggestions();
        assert!(suggestions[0].contains("job-recommender"));
    }
}
