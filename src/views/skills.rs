// src/views/skills.rs
use super::{Element, Metric, Tone};
use crate::charts::{ColorScale, Figure, Orientation};
use crate::snapshot::MetricSnapshot;

const HEATMAP_SKILLS: [&str; 6] = ["AI", "Python", "Cloud", "ML", "SQL", "AWS"];
const HEATMAP_CITIES: [&str; 5] = ["Bangalore", "Hyderabad", "Pune", "Mumbai", "Chennai"];

/// Skill demand per city, rows follow `HEATMAP_CITIES`.
const HEATMAP: [[u32; 6]; 5] = [
    [350, 280, 250, 180, 120, 110],
    [320, 260, 240, 170, 115, 105],
    [310, 255, 235, 165, 110, 100],
    [305, 250, 230, 160, 108, 98],
    [295, 245, 225, 155, 105, 95],
];

pub fn render(snapshot: &MetricSnapshot) -> Vec<Element> {
    let shares = snapshot.skill_shares();
    let skills = Figure::bar(
        "skills-demand",
        shares.iter().map(|s| (s.skill, f64::from(s.jobs))),
        Orientation::Horizontal,
        ("Skill", "Jobs"),
    )
    .with_color_scale(ColorScale::Viridis)
    .with_hover("Percentage", shares.iter().map(|s| s.percentage).collect())
    .with_height(600);

    let heatmap = Figure::heatmap(
        "skills-heatmap",
        &HEATMAP_SKILLS,
        &HEATMAP_CITIES,
        HEATMAP
            .iter()
            .map(|row| row.iter().map(|&v| f64::from(v)).collect())
            .collect(),
        ColorScale::YlOrRd,
    )
    .with_title("Skills Demand Across Indian Cities");

    vec![
        Element::header("🛠️ Skills Demand in Indian Tech Market"),
        Element::subheader("📈 Top 15 Most Demanded Skills"),
        Element::Chart(skills),
        Element::Divider,
        Element::weighted_columns(vec![
            (
                2,
                vec![Element::titled_callout(
                    Tone::Success,
                    "🎯 Key Skill Insights:",
                    &[
                        "AI is #1 with 987 jobs (21.2%) - Highest demand!",
                        "Python appears in 625 jobs (13.4%) - Essential skill",
                        "Cloud skills are critical: AWS (251), Azure (203), GCP (80)",
                        "Data Engineering tools rising: Databricks (101), Snowflake (86)",
                    ],
                )],
            ),
            (
                1,
                vec![
                    Element::Metric(Metric::new("Most In-Demand", "AI").with_delta("987 jobs")),
                    Element::Metric(Metric::new("Programming", "Python").with_delta("625 jobs")),
                    Element::Metric(Metric::new("Cloud Leader", "AWS").with_delta("251 jobs")),
                ],
            ),
        ]),
        Element::Divider,
        Element::subheader("🔥 Skills Heatmap: Demand by Top Cities"),
        Element::Chart(heatmap),
    ]
}
