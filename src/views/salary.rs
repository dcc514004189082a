// src/views/salary.rs
use super::{Element, Metric, Tone};
use crate::charts::{ColorScale, Figure, Orientation};
use crate::snapshot::MetricSnapshot;

pub fn render(snapshot: &MetricSnapshot) -> Vec<Element> {
    let salary = &snapshot.salary;
    let coverage = &snapshot.coverage;

    let by_seniority = Figure::bar(
        "salary-by-seniority",
        salary.by_seniority.iter(),
        Orientation::Vertical,
        ("Level", "Average (LPA)"),
    )
    .with_color_scale(ColorScale::Blues)
    .with_text_template("₹%{text:.1f}");

    let by_role = Figure::bar(
        "salary-by-role",
        salary.by_role.iter(),
        Orientation::Horizontal,
        ("Role", "Average (LPA)"),
    )
    .with_color_scale(ColorScale::RdYlGn)
    .with_text_template("₹%{text:.1f}");

    vec![
        Element::header("💰 Indian Tech Salary Insights"),
        Element::columns(vec![
            vec![Element::Metric(Metric::new("Average Salary", lpa(salary.avg)))],
            vec![Element::Metric(Metric::new("Median Salary", lpa(salary.median)))],
            vec![Element::Metric(Metric::new("Highest Salary", lpa(salary.highest)))],
        ]),
        Element::Divider,
        Element::columns(vec![
            vec![
                Element::subheader("📊 Salary by Seniority"),
                Element::Chart(by_seniority),
            ],
            vec![
                Element::subheader("💼 Salary by Role"),
                Element::Chart(by_role),
            ],
        ]),
        Element::Divider,
        Element::titled_callout(
            Tone::Success,
            "💡 Key Salary Insights:",
            &[
                "Data Science/ML pays highest at ₹18.1 LPA average",
                "Senior roles earn 4.1x more than Junior (₹19.7L vs ₹4.8L)",
                "Problem: Only 11.8% of Indian jobs disclose salary - major transparency issue!",
                "Bangalore offers highest average salary: ₹16.5 LPA",
            ],
        ),
        Element::Callout {
            tone: Tone::Warning,
            title: None,
            lines: vec![format!(
                "⚠️ Salary Transparency Problem: Only {} out of {} jobs ({}%) include salary information!",
                coverage.salaries_disclosed,
                super::overview::thousands(coverage.jobs_analyzed),
                coverage.disclosure_rate()
            )],
        },
    ]
}

/// 15.6 -> "₹15.6 LPA"
pub fn lpa(value: f64) -> String {
    format!("₹{:.1} LPA", value)
}
