// src/views/recommender.rs
use super::{selected_or_default, Element, Metric, Selections, Tone, Widget};
use crate::error::DashboardError;
use crate::recommender::{
    self, RecommendationCandidate, UserProfile, DEFAULT_MIN_SALARY,
    DEFAULT_PREFERRED_CITIES, DEFAULT_SKILLS, MIN_SALARY_RANGE, RECOMMENDED_SKILLS,
    SKILL_VOCABULARY,
};
use crate::snapshot::MetricSnapshot;

pub const SKILL_FIELD: &str = "skill";
pub const PREFERRED_CITY_FIELD: &str = "preferred_city";
pub const MIN_SALARY_FIELD: &str = "min_salary";
pub const SUBMIT_FIELD: &str = "submit";

/// Outcome of one pass through the recommender form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommenderState {
    Idle,
    Results(Vec<RecommendationCandidate>),
    Failed(DashboardError),
}

impl RecommenderState {
    pub fn from_submission(profile: &UserProfile, submitted: bool) -> Self {
        if !submitted {
            return RecommenderState::Idle;
        }
        match recommender::recommend(profile) {
            Ok(candidates) => RecommenderState::Results(candidates),
            Err(e) => RecommenderState::Failed(e),
        }
    }
}

/// Widget values resolved against their defaults.
pub fn profile_from(selections: &Selections) -> UserProfile {
    let min_salary = selections
        .min_salary
        .unwrap_or(i64::from(DEFAULT_MIN_SALARY));
    UserProfile::new(
        selected_or_default(&selections.skills, &DEFAULT_SKILLS),
        selected_or_default(&selections.preferred_cities, &DEFAULT_PREFERRED_CITIES),
        min_salary,
    )
}

pub fn render(snapshot: &MetricSnapshot, selections: &Selections) -> Vec<Element> {
    let profile = profile_from(selections);
    let state = RecommenderState::from_submission(&profile, selections.submitted);

    let mut form = vec![
        Element::subheader("👤 Your Profile"),
        Element::Widget(Widget::MultiSelect {
            name: SKILL_FIELD.to_string(),
            label: "🛠️ Select your skills:".to_string(),
            options: SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            selected: profile.skills.clone(),
        }),
        Element::columns(vec![
            vec![Element::Widget(Widget::MultiSelect {
                name: PREFERRED_CITY_FIELD.to_string(),
                label: "📍 Preferred cities:".to_string(),
                options: snapshot.cities.labels().iter().map(|s| s.to_string()).collect(),
                selected: profile.preferred_cities.clone(),
            })],
            vec![Element::Widget(Widget::Slider {
                name: MIN_SALARY_FIELD.to_string(),
                label: "💰 Minimum salary (LPA):".to_string(),
                min: *MIN_SALARY_RANGE.start(),
                max: *MIN_SALARY_RANGE.end(),
                value: profile.min_salary,
            })],
        ]),
        Element::Widget(Widget::Button {
            name: SUBMIT_FIELD.to_string(),
            label: "🔍 Find Matching Jobs".to_string(),
        }),
    ];
    form.extend(outcome_elements(&profile, &state));

    vec![
        Element::header("🎯 AI-Powered Job Recommender"),
        Element::paragraph("Enter your skills and get personalized Indian job recommendations!"),
        Element::weighted_columns(vec![(2, form), (1, profile_stats(&profile))]),
    ]
}

fn outcome_elements(profile: &UserProfile, state: &RecommenderState) -> Vec<Element> {
    match state {
        RecommenderState::Idle => Vec::new(),
        RecommenderState::Failed(e) => vec![Element::Callout {
            tone: Tone::Error,
            title: None,
            lines: vec![e.to_string()],
        }],
        RecommenderState::Results(candidates) => {
            let mut elements = vec![
                Element::Callout {
                    tone: Tone::Success,
                    title: None,
                    lines: vec![format!(
                        "✅ Searching for jobs matching {} skills...",
                        profile.skills.len()
                    )],
                },
                Element::Divider,
                Element::subheader("🎯 Top Job Matches for You"),
            ];
            for (rank, candidate) in candidates.iter().enumerate() {
                elements.extend(candidate_card(rank + 1, candidate));
            }
            elements
        }
    }
}

fn candidate_card(rank: usize, candidate: &RecommendationCandidate) -> Vec<Element> {
    vec![
        Element::weighted_columns(vec![
            (
                3,
                vec![
                    Element::heading(format!("{}. {}", rank, candidate.title)),
                    Element::paragraph(format!(
                        "🏢 {} | 📍 {}",
                        candidate.company, candidate.city
                    )),
                ],
            ),
            (
                1,
                vec![Element::Metric(Metric::new(
                    "Match",
                    format!("{}%", candidate.match_percent),
                ))],
            ),
            (
                1,
                vec![Element::Metric(Metric::new("Salary", candidate.salary))],
            ),
        ]),
        Element::paragraph(format!("✅ You have: {}", candidate.has.join(", "))),
        Element::paragraph(format!("⚠️ You need: {}", candidate.needs.join(", "))),
        Element::Divider,
    ]
}

fn profile_stats(profile: &UserProfile) -> Vec<Element> {
    let mut elements = vec![Element::subheader("📊 Your Profile Stats")];
    if profile.skills.is_empty() {
        return elements;
    }

    let cities = if profile.preferred_cities.is_empty() {
        "All".to_string()
    } else {
        profile.preferred_cities.len().to_string()
    };
    let recommended: Vec<String> = RECOMMENDED_SKILLS.iter().map(|s| format!("- {}", s)).collect();

    elements.extend([
        Element::Metric(Metric::new("Skills", profile.skills.len().to_string())),
        Element::Metric(Metric::new("Cities", cities)),
        Element::Metric(Metric::new(
            "Min Salary",
            format!("₹{} LPA", profile.min_salary),
        )),
        Element::Divider,
        Element::Callout {
            tone: Tone::Info,
            title: Some("🎓 Recommended Skills:".to_string()),
            lines: recommended,
        },
    ]);
    elements
}
