// src/views/market.rs
use super::{selected_or_default, Element, Selections, Tone, Widget};
use crate::charts::{ColorScale, Figure, Orientation, Palette};
use crate::snapshot::MetricSnapshot;
use tracing::warn;

pub const DEFAULT_COMPARE_CITIES: [&str; 3] = ["Bangalore", "Mumbai", "Pune"];

/// Query parameter carrying the comparison tool's selection.
pub const COMPARE_FIELD: &str = "city";

pub fn render(snapshot: &MetricSnapshot, selections: &Selections) -> Vec<Element> {
    let states = Figure::bar(
        "market-states",
        snapshot.states.iter().map(|(state, n)| (state, f64::from(n))),
        Orientation::Horizontal,
        ("State", "Jobs"),
    )
    .with_color_scale(ColorScale::Greens);

    let seniority = Figure::pie(
        "market-seniority",
        snapshot
            .seniority
            .iter()
            .map(|(level, n)| (level, f64::from(n))),
        0.4,
        Palette::Pastel,
    );

    let mut elements = vec![
        Element::header("🗺️ Indian Job Market Analysis"),
        Element::columns(vec![
            vec![
                Element::subheader("📍 Top Indian States"),
                Element::Chart(states),
            ],
            vec![
                Element::subheader("📊 Seniority Distribution"),
                Element::Chart(seniority),
            ],
        ]),
        Element::Divider,
        Element::titled_callout(
            Tone::Info,
            "💡 Market Insights:",
            &[
                "Top 3 States: Maharashtra (32.7%), Karnataka (18.1%), Telangana (17.0%)",
                "Senior roles make up 37% of all positions",
                "South India accounts for 50% of tech jobs",
                "Only 3.9% are Junior positions - highly competitive for freshers",
            ],
        ),
        Element::Divider,
        Element::subheader("🔍 City Comparison Tool"),
    ];

    let selected = comparison_selection(snapshot, selections);
    elements.push(Element::Widget(Widget::MultiSelect {
        name: COMPARE_FIELD.to_string(),
        label: "Select cities to compare:".to_string(),
        options: snapshot.cities.labels().iter().map(|s| s.to_string()).collect(),
        selected: selected.clone(),
    }));

    if let Some(figure) = comparison_chart(snapshot, &selected) {
        elements.push(Element::Chart(figure));
    }

    elements
}

/// The comparison multi-select's value, restricted to snapshot cities.
fn comparison_selection(snapshot: &MetricSnapshot, selections: &Selections) -> Vec<String> {
    let requested = selected_or_default(&selections.compare_cities, &DEFAULT_COMPARE_CITIES);
    let (known, unknown): (Vec<String>, Vec<String>) = requested
        .into_iter()
        .partition(|city| snapshot.cities.contains(city));
    if !unknown.is_empty() {
        warn!(cities = ?unknown, "Ignoring cities missing from the snapshot");
    }
    known
}

/// One bar per selected city, in selection order. `None` when nothing is
/// selected.
pub fn comparison_chart(snapshot: &MetricSnapshot, cities: &[String]) -> Option<Figure> {
    let bars: Vec<(String, f64)> = cities
        .iter()
        .filter_map(|city| {
            snapshot
                .cities
                .get(city)
                .map(|jobs| (city.clone(), f64::from(jobs)))
        })
        .collect();
    if bars.is_empty() {
        return None;
    }

    let title = format!(
        "Job Distribution: {}",
        bars.iter()
            .map(|(city, _)| city.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Some(
        Figure::bar("market-city-comparison", bars, Orientation::Vertical, ("City", "Jobs"))
            .with_category_colors(Palette::Plotly)
            .with_title(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::snapshot;
    use crate::views::collect_figures;

    fn comparison(elements: &[Element]) -> Option<Figure> {
        collect_figures(elements)
            .into_iter()
            .find(|f| f.id == "market-city-comparison")
            .cloned()
    }

    #[test]
    fn test_default_comparison_uses_three_cities() {
        let elements = render(snapshot(), &Selections::default());
        let chart = comparison(&elements).expect("comparison chart");
        assert_eq!(chart.labels(), ["Bangalore", "Mumbai", "Pune"]);
        assert_eq!(chart.values(), vec![845.0, 758.0, 768.0]);
        assert_eq!(
            chart.title.as_deref(),
            Some("Job Distribution: Bangalore, Mumbai, Pune")
        );
    }

    #[test]
    fn test_each_selected_city_gets_its_snapshot_count() {
        let all: Vec<String> = snapshot().cities.labels().iter().map(|s| s.to_string()).collect();
        let selections = Selections {
            compare_cities: Some(all.clone()),
            ..Default::default()
        };
        let chart = comparison(&render(snapshot(), &selections)).unwrap();
        assert_eq!(chart.labels().len(), 6);
        for (city, value) in chart.labels().iter().zip(chart.values()) {
            assert_eq!(Some(value), snapshot().cities.get(city).map(f64::from));
        }
    }

    #[test]
    fn test_empty_selection_omits_chart() {
        let selections = Selections {
            compare_cities: Some(vec![]),
            ..Default::default()
        };
        let elements = render(snapshot(), &selections);
        assert!(comparison(&elements).is_none());
        assert!(matches!(elements.last(), Some(Element::Widget(_))));
    }

    #[test]
    fn test_unknown_cities_are_dropped() {
        let selections = Selections {
            compare_cities: Some(vec!["Kolkata".into(), "Delhi".into()]),
            ..Default::default()
        };
        let chart = comparison(&render(snapshot(), &selections)).unwrap();
        assert_eq!(chart.labels(), ["Delhi"]);
        assert_eq!(chart.values(), vec![450.0]);
    }
}
