// src/shell.rs
//! Page chrome shared by every section: header, key metrics, sidebar
//! navigation and footer. Exactly one section body is rendered per page.

use crate::charts::Figure;
use crate::snapshot::MetricSnapshot;
use crate::views::overview::thousands;
use crate::views::salary::lpa;
use crate::views::{Element, Metric, Section, Selections};
use serde::Serialize;
use tracing::debug;

pub const FLAG_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/en/thumb/4/41/Flag_of_India.svg/320px-Flag_of_India.svg.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub title: String,
    pub image_url: &'static str,
    pub prompt: &'static str,
    pub nav: Vec<NavItem>,
    /// Data-source box, one entry per line.
    pub info: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub section: Section,
    pub sidebar: Sidebar,
    pub header: Vec<Element>,
    pub body: Vec<Element>,
    pub footer: Vec<String>,
}

impl Page {
    /// Every element on the page, chrome first.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.header.iter().chain(self.body.iter())
    }

    /// Figures in page order; each becomes one plot call.
    pub fn figures(&self) -> Vec<&Figure> {
        self.elements().flat_map(Element::figures).collect()
    }
}

/// Builds the full page for `section`.
pub fn compose(
    title: &str,
    section: Section,
    snapshot: &MetricSnapshot,
    selections: &Selections,
) -> Page {
    debug!(section = section.slug(), "Composing dashboard page");
    Page {
        title: title.to_string(),
        section,
        sidebar: sidebar(section, snapshot),
        header: header(snapshot),
        body: section.render(snapshot, selections),
        footer: footer(snapshot),
    }
}

pub fn navigation(active: Section) -> Vec<NavItem> {
    Section::ALL
        .iter()
        .map(|&section| NavItem {
            slug: section.slug(),
            label: section.label(),
            icon: section.icon(),
            active: section == active,
        })
        .collect()
}

fn sidebar(active: Section, snapshot: &MetricSnapshot) -> Sidebar {
    let coverage = &snapshot.coverage;
    Sidebar {
        title: "🇮🇳 Navigation".to_string(),
        image_url: FLAG_IMAGE_URL,
        prompt: "Choose a section:",
        nav: navigation(active),
        info: vec![
            format!("Data Source: {}", coverage.source),
            format!("Jobs Analyzed: {}", thousands(coverage.jobs_analyzed)),
            format!("Cities: {}", coverage.cities_covered),
            format!("Last Updated: {}", coverage.last_updated_label()),
        ],
    }
}

fn header(snapshot: &MetricSnapshot) -> Vec<Element> {
    let coverage = &snapshot.coverage;
    let top_city = snapshot.cities.labels().first().copied().unwrap_or("-");
    let (top_skill, top_skill_jobs) = snapshot.skills.iter().next().unwrap_or(("-", 0));

    vec![
        Element::header("🇮🇳 Indian Job Market Intelligence"),
        Element::subheader("AI-Powered Job Analysis & Recommendation System"),
        Element::Divider,
        Element::columns(vec![
            vec![Element::Metric(
                Metric::new("Total Jobs", thousands(coverage.jobs_analyzed)).with_delta("+1,200"),
            )],
            vec![Element::Metric(
                Metric::new("Indian Cities", coverage.cities_covered.to_string())
                    .with_delta(format!("Top: {}", top_city)),
            )],
            vec![Element::Metric(
                Metric::new("Avg Salary", lpa(snapshot.salary.avg)).with_delta("+12%"),
            )],
            vec![Element::Metric(
                Metric::new("Top Skill", top_skill).with_delta(format!("{} jobs", top_skill_jobs)),
            )],
        ]),
        Element::Divider,
    ]
}

fn footer(snapshot: &MetricSnapshot) -> Vec<String> {
    let coverage = &snapshot.coverage;
    vec![
        "🇮🇳 Indian Job Market Intelligence Dashboard | Built with Rust, Rocket & Plotly".to_string(),
        format!(
            "📊 Data from {} | {} Jobs Analyzed | {} Indian Cities | {}",
            coverage.source,
            thousands(coverage.jobs_analyzed),
            coverage.cities_covered,
            coverage.last_updated_long()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::snapshot;
    use crate::views::collect_metrics;

    #[test]
    fn test_exactly_one_nav_item_active() {
        for section in Section::ALL {
            let nav = navigation(section);
            assert_eq!(nav.len(), 5);
            let active: Vec<_> = nav.iter().filter(|n| n.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].slug, section.slug());
        }
    }

    #[test]
    fn test_key_metrics_strip() {
        let page = compose("t", Section::Overview, snapshot(), &Selections::default());
        let metrics: Vec<_> = collect_metrics(&page.header)
            .iter()
            .map(|m| (m.label.clone(), m.value.clone(), m.delta.clone()))
            .collect();
        assert_eq!(
            metrics[0],
            ("Total Jobs".into(), "4,665".into(), Some("+1,200".into()))
        );
        assert_eq!(
            metrics[1],
            ("Indian Cities".into(), "76".into(), Some("Top: Bangalore".into()))
        );
        assert_eq!(metrics[2].1, "₹15.6 LPA");
        assert_eq!(metrics[3].2.as_deref(), Some("987 jobs"));
    }

    #[test]
    fn test_sidebar_and_footer_provenance() {
        let page = compose("t", Section::SalaryAnalysis, snapshot(), &Selections::default());
        assert_eq!(page.sidebar.info[1], "Jobs Analyzed: 4,665");
        assert_eq!(page.sidebar.info[3], "Last Updated: Dec 2025");
        assert!(page.footer[1].contains("76 Indian Cities | December 2025"));
        assert_eq!(page.section, Section::SalaryAnalysis);
    }

    #[test]
    fn test_page_body_matches_section_render() {
        let selections = Selections::default();
        let page = compose("t", Section::SkillsInsights, snapshot(), &selections);
        assert_eq!(page.body, Section::SkillsInsights.render(snapshot(), &selections));
        assert!(page.elements().count() > page.body.len());
    }

    #[test]
    fn test_page_figures_in_page_order() {
        let page = compose("t", Section::Overview, snapshot(), &Selections::default());
        let ids: Vec<_> = page.figures().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["overview-cities", "overview-roles", "overview-companies"]);

        let page = compose("t", Section::JobRecommender, snapshot(), &Selections::default());
        assert!(page.figures().is_empty());
    }
}
