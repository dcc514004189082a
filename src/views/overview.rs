// src/views/overview.rs
use super::{Element, Tone};
use crate::charts::{ColorScale, Figure, Orientation, Palette};
use crate::snapshot::{percent_of, MetricSnapshot};

pub fn render(snapshot: &MetricSnapshot) -> Vec<Element> {
    let cities = Figure::bar(
        "overview-cities",
        snapshot.cities.iter().map(|(city, jobs)| (city, f64::from(jobs))),
        Orientation::Horizontal,
        ("City", "Jobs"),
    )
    .with_color_scale(ColorScale::Blues);

    let roles = Figure::pie(
        "overview-roles",
        snapshot.roles.iter().map(|(role, n)| (role, f64::from(n))),
        0.4,
        Palette::Set3,
    );

    let companies = Figure::bar(
        "overview-companies",
        snapshot
            .companies
            .iter()
            .map(|(company, n)| (company, f64::from(n))),
        Orientation::Vertical,
        ("Company", "Openings"),
    )
    .with_color_scale(ColorScale::Oranges)
    .with_height(350);

    vec![
        Element::header("📊 Indian Tech Job Market Overview"),
        Element::columns(vec![
            vec![
                Element::subheader("🏆 Top 10 Indian Tech Hubs"),
                Element::Chart(cities),
            ],
            vec![
                Element::subheader("💼 Job Role Distribution"),
                Element::Chart(roles),
            ],
        ]),
        Element::Divider,
        Element::subheader("🏢 Top Hiring Companies in India"),
        Element::Chart(companies),
        Element::Callout {
            tone: Tone::Success,
            title: None,
            lines: vec![headline(snapshot)],
        },
    ]
}

/// Leading city and leading state with their shares of all jobs.
fn headline(snapshot: &MetricSnapshot) -> String {
    let total = snapshot.coverage.jobs_analyzed;
    let (city, city_jobs) = snapshot.cities.iter().next().unwrap_or(("-", 0));
    let (state, state_jobs) = snapshot.states.iter().next().unwrap_or(("-", 0));
    format!(
        "✅ {} leads with {} jobs ({}%) | {} state has {} jobs ({}%)",
        city,
        city_jobs,
        percent_of(city_jobs, total),
        state,
        thousands(state_jobs),
        percent_of(state_jobs, total)
    )
}

/// 1526 -> "1,526"
pub(crate) fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
