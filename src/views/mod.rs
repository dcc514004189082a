// src/views/mod.rs
//! Section renderers.
//!
//! Every renderer is a pure function of the snapshot and the current widget
//! values, returning display elements in top-to-bottom order.

pub mod market;
pub mod overview;
pub mod recommender;
pub mod salary;
pub mod skills;

use crate::charts::Figure;
use crate::error::DashboardError;
use crate::snapshot::MetricSnapshot;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Overview,
    MarketAnalysis,
    SkillsInsights,
    JobRecommender,
    SalaryAnalysis,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::MarketAnalysis,
        Section::SkillsInsights,
        Section::JobRecommender,
        Section::SalaryAnalysis,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::MarketAnalysis => "market-analysis",
            Section::SkillsInsights => "skills-insights",
            Section::JobRecommender => "job-recommender",
            Section::SalaryAnalysis => "salary-analysis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::MarketAnalysis => "Market Analysis",
            Section::SkillsInsights => "Skills Insights",
            Section::JobRecommender => "Job Recommender",
            Section::SalaryAnalysis => "Salary Analysis",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Overview => "🏠",
            Section::MarketAnalysis => "🗺️",
            Section::SkillsInsights => "🛠️",
            Section::JobRecommender => "🎯",
            Section::SalaryAnalysis => "💰",
        }
    }

    /// Renders this section's body.
    pub fn render(self, snapshot: &MetricSnapshot, selections: &Selections) -> Vec<Element> {
        match self {
            Section::Overview => overview::render(snapshot),
            Section::MarketAnalysis => market::render(snapshot, selections),
            Section::SkillsInsights => skills::render(snapshot),
            Section::JobRecommender => recommender::render(snapshot, selections),
            Section::SalaryAnalysis => salary::render(snapshot),
        }
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == wanted)
            .ok_or_else(|| DashboardError::UnknownSection(s.to_string()))
    }
}

/// Widget values for one render pass. `None` means the widget still shows
/// its default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selections {
    pub compare_cities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub preferred_cities: Option<Vec<String>>,
    pub min_salary: Option<i64>,
    /// The recommender button was pressed in this pass.
    pub submitted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    MultiSelect {
        name: String,
        label: String,
        options: Vec<String>,
        selected: Vec<String>,
    },
    Slider {
        name: String,
        label: String,
        min: u32,
        max: u32,
        value: u32,
    },
    Button {
        name: String,
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub weight: u8,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Header {
        text: String,
    },
    Subheader {
        text: String,
    },
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Metric(Metric),
    Chart(Figure),
    Callout {
        tone: Tone,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        lines: Vec<String>,
    },
    Divider,
    Columns {
        columns: Vec<Column>,
    },
    Widget(Widget),
}

impl Element {
    pub fn header(text: impl Into<String>) -> Self {
        Element::Header { text: text.into() }
    }

    pub fn subheader(text: impl Into<String>) -> Self {
        Element::Subheader { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Element::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Element::Paragraph { text: text.into() }
    }

    pub fn callout(tone: Tone, lines: &[&str]) -> Self {
        Element::Callout {
            tone,
            title: None,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn titled_callout(tone: Tone, title: &str, lines: &[&str]) -> Self {
        Element::Callout {
            tone,
            title: Some(title.to_string()),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Equal-width columns.
    pub fn columns(columns: Vec<Vec<Element>>) -> Self {
        Self::weighted_columns(columns.into_iter().map(|c| (1, c)).collect())
    }

    pub fn weighted_columns(columns: Vec<(u8, Vec<Element>)>) -> Self {
        Element::Columns {
            columns: columns
                .into_iter()
                .map(|(weight, elements)| Column { weight, elements })
                .collect(),
        }
    }

    /// Every figure in this element, descending into columns.
    pub fn figures(&self) -> Vec<&Figure> {
        match self {
            Element::Chart(figure) => vec![figure],
            Element::Columns { columns } => columns
                .iter()
                .flat_map(|c| c.elements.iter().flat_map(Element::figures))
                .collect(),
            _ => Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn metrics(&self) -> Vec<&Metric> {
        match self {
            Element::Metric(metric) => vec![metric],
            Element::Columns { columns } => columns
                .iter()
                .flat_map(|c| c.elements.iter().flat_map(Element::metrics))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
pub(crate) fn collect_figures(elements: &[Element]) -> Vec<&Figure> {
    elements.iter().flat_map(Element::figures).collect()
}

#[cfg(test)]
pub(crate) fn collect_metrics(elements: &[Element]) -> Vec<&Metric> {
    elements.iter().flat_map(Element::metrics).collect()
}

/// Multi-select value: the user's choice when present, otherwise defaults.
pub(crate) fn selected_or_default(selected: &Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    match selected {
        Some(values) => values.clone(),
        None => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::snapshot;

    #[test]
    fn test_section_slug_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.slug().parse::<Section>(), Ok(section));
        }
        assert_eq!(" Overview ".parse::<Section>(), Ok(Section::Overview));
        assert!(matches!(
            "careers".parse::<Section>(),
            Err(DashboardError::UnknownSection(_))
        ));
    }

    #[test]
    fn test_every_section_renders_elements() {
        let selections = Selections::default();
        for section in Section::ALL {
            let elements = section.render(snapshot(), &selections);
            assert!(!elements.is_empty(), "{} rendered nothing", section.slug());
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let selections = Selections {
            compare_cities: Some(vec!["Delhi".into(), "Pune".into()]),
            skills: Some(vec!["AI".into()]),
            submitted: true,
            ..Default::default()
        };
        for section in Section::ALL {
            let first = section.render(snapshot(), &selections);
            let second = section.render(snapshot(), &selections);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_collect_figures_descends_into_columns() {
        let elements = Section::Overview.render(snapshot(), &Selections::default());
        let ids: Vec<_> = collect_figures(&elements)
            .iter()
            .map(|f| f.id.clone())
            .collect();
        assert_eq!(
            ids,
            vec!["overview-cities", "overview-roles", "overview-companies"]
        );
    }
}
