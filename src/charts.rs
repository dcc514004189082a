// src/charts.rs
//! Figure descriptions handed to the plotting engine.
//!
//! A `Figure` is a plain description: labels, values and display options.
//! `to_plotly` turns it into the `{data, layout}` pair Plotly.js consumes in
//! the browser; nothing here draws anything.

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Continuous color scale applied by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorScale {
    Blues,
    Greens,
    Oranges,
    Viridis,
    YlOrRd,
    RdYlGn,
}

impl ColorScale {
    pub fn plotly_name(self) -> &'static str {
        match self {
            ColorScale::Blues => "Blues",
            ColorScale::Greens => "Greens",
            ColorScale::Oranges => "Oranges",
            ColorScale::Viridis => "Viridis",
            ColorScale::YlOrRd => "YlOrRd",
            ColorScale::RdYlGn => "RdYlGn",
        }
    }
}

/// Discrete palettes for pie slices and per-category bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Palette {
    Set3,
    Pastel,
    Plotly,
}

impl Palette {
    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Palette::Set3 => &[
                "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69",
                "#fccde5", "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
            ],
            Palette::Pastel => &[
                "#66c5cc", "#f6cf71", "#f89c74", "#dcb0f2", "#87c55f", "#9eb9f3", "#fe88b1",
                "#c9db74", "#8be0a4", "#b497e7", "#d3b484", "#b3b3b3",
            ],
            Palette::Plotly => &[
                "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692",
                "#b6e880", "#ff97ff", "#fecb52",
            ],
        }
    }

    /// Colors for `n` categories, cycling the palette.
    pub fn take(self, n: usize) -> Vec<&'static str> {
        self.colors().iter().copied().cycle().take(n).collect()
    }
}

/// Extra per-bar value shown on hover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverColumn {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FigureKind {
    Bar {
        labels: Vec<String>,
        values: Vec<f64>,
        orientation: Orientation,
        /// Axis titles: (category axis, value axis).
        axis_titles: (String, String),
        #[serde(skip_serializing_if = "Option::is_none")]
        color_scale: Option<ColorScale>,
        /// One discrete color per bar, used instead of a color scale.
        #[serde(skip_serializing_if = "Option::is_none")]
        palette: Option<Palette>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text_template: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hover: Option<HoverColumn>,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        hole: f64,
        palette: Palette,
    },
    Heatmap {
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<f64>>,
        color_scale: ColorScale,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// DOM id of the chart container; stable across renders.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub height: u32,
    pub show_legend: bool,
    #[serde(flatten)]
    pub kind: FigureKind,
}

impl Figure {
    /// Bar chart coloured by value, with the value printed outside each bar.
    pub fn bar<L, I>(id: &str, series: I, orientation: Orientation, axis_titles: (&str, &str)) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let (labels, values): (Vec<String>, Vec<f64>) =
            series.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self {
            id: id.to_string(),
            title: None,
            height: 400,
            show_legend: false,
            kind: FigureKind::Bar {
                labels,
                values,
                orientation,
                axis_titles: (axis_titles.0.to_string(), axis_titles.1.to_string()),
                color_scale: None,
                palette: None,
                text_template: Some("%{text}".to_string()),
                hover: None,
            },
        }
    }

    /// Donut chart with percent+label inside each slice.
    pub fn pie<L, I>(id: &str, series: I, hole: f64, palette: Palette) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let (labels, values): (Vec<String>, Vec<f64>) =
            series.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self {
            id: id.to_string(),
            title: None,
            height: 400,
            show_legend: true,
            kind: FigureKind::Pie {
                labels,
                values,
                hole,
                palette,
            },
        }
    }

    pub fn heatmap(
        id: &str,
        x: &[&str],
        y: &[&str],
        z: Vec<Vec<f64>>,
        color_scale: ColorScale,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: None,
            height: 400,
            show_legend: false,
            kind: FigureKind::Heatmap {
                x: x.iter().map(|s| s.to_string()).collect(),
                y: y.iter().map(|s| s.to_string()).collect(),
                z,
                color_scale,
            },
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_color_scale(mut self, scale: ColorScale) -> Self {
        if let FigureKind::Bar { color_scale, .. } = &mut self.kind {
            *color_scale = Some(scale);
        }
        self
    }

    /// One palette color per bar, with a legend entry per category.
    pub fn with_category_colors(mut self, colors: Palette) -> Self {
        if let FigureKind::Bar {
            palette,
            text_template,
            ..
        } = &mut self.kind
        {
            *palette = Some(colors);
            *text_template = None;
        }
        self.show_legend = true;
        self
    }

    pub fn with_text_template(mut self, template: impl Into<String>) -> Self {
        if let FigureKind::Bar { text_template, .. } = &mut self.kind {
            *text_template = Some(template.into());
        }
        self
    }

    pub fn with_hover(mut self, name: &str, values: Vec<f64>) -> Self {
        if let FigureKind::Bar { hover, .. } = &mut self.kind {
            *hover = Some(HoverColumn {
                name: name.to_string(),
                values,
            });
        }
        self
    }

    /// Category labels in display order.
    pub fn labels(&self) -> &[String] {
        match &self.kind {
            FigureKind::Bar { labels, .. } | FigureKind::Pie { labels, .. } => labels,
            FigureKind::Heatmap { y, .. } => y,
        }
    }

    /// Plotted numbers, flattened row by row for heatmaps.
    pub fn values(&self) -> Vec<f64> {
        match &self.kind {
            FigureKind::Bar { values, .. } | FigureKind::Pie { values, .. } => values.clone(),
            FigureKind::Heatmap { z, .. } => z.iter().flatten().copied().collect(),
        }
    }

    /// Plotly `{data, layout}` figure.
    pub fn to_plotly(&self) -> Value {
        let data = match &self.kind {
            FigureKind::Bar {
                labels,
                values,
                orientation,
                axis_titles,
                color_scale,
                palette,
                text_template,
                hover,
            } => bar_traces(
                labels,
                values,
                *orientation,
                axis_titles,
                *color_scale,
                *palette,
                text_template.as_deref(),
                hover.as_ref(),
            ),
            FigureKind::Pie {
                labels,
                values,
                hole,
                palette,
            } => vec![json!({
                "type": "pie",
                "labels": labels,
                "values": values,
                "hole": hole,
                "marker": { "colors": palette.take(labels.len()) },
                "textposition": "inside",
                "textinfo": "percent+label",
            })],
            FigureKind::Heatmap {
                x,
                y,
                z,
                color_scale,
            } => vec![json!({
                "type": "heatmap",
                "x": x,
                "y": y,
                "z": z,
                "colorscale": color_scale.plotly_name(),
            })],
        };

        let mut layout = json!({
            "height": self.height,
            "showlegend": self.show_legend,
            "margin": { "t": if self.title.is_some() { 50 } else { 20 } },
        });
        if let Some(title) = &self.title {
            layout["title"] = json!({ "text": title });
        }
        if let FigureKind::Bar {
            orientation,
            axis_titles,
            ..
        } = &self.kind
        {
            let (category_axis, value_axis) = match orientation {
                Orientation::Vertical => ("xaxis", "yaxis"),
                Orientation::Horizontal => ("yaxis", "xaxis"),
            };
            layout[category_axis] = json!({ "title": { "text": axis_titles.0 } });
            layout[value_axis] = json!({ "title": { "text": axis_titles.1 } });
        }

        json!({ "data": data, "layout": layout })
    }
}

#[allow(clippy::too_many_arguments)]
fn bar_traces(
    labels: &[String],
    values: &[f64],
    orientation: Orientation,
    axis_titles: &(String, String),
    color_scale: Option<ColorScale>,
    palette: Option<Palette>,
    text_template: Option<&str>,
    hover: Option<&HoverColumn>,
) -> Vec<Value> {
    let axes = |label: &Value, value: &Value| match orientation {
        Orientation::Vertical => (label.clone(), value.clone()),
        Orientation::Horizontal => (value.clone(), label.clone()),
    };

    // Per-category colouring: one trace per bar so each gets a legend entry.
    if let Some(palette) = palette {
        return labels
            .iter()
            .zip(values)
            .zip(palette.take(labels.len()))
            .map(|((label, value), color)| {
                let (x, y) = axes(&json!([label]), &json!([value]));
                json!({
                    "type": "bar",
                    "name": label,
                    "x": x,
                    "y": y,
                    "orientation": orientation_code(orientation),
                    "marker": { "color": color },
                })
            })
            .collect();
    }

    let (x, y) = axes(&json!(labels), &json!(values));
    let mut trace = json!({
        "type": "bar",
        "x": x,
        "y": y,
        "orientation": orientation_code(orientation),
        "text": values,
    });
    if let Some(scale) = color_scale {
        trace["marker"] = json!({
            "color": values,
            "colorscale": scale.plotly_name(),
        });
    }
    if let Some(template) = text_template {
        trace["texttemplate"] = json!(template);
        trace["textposition"] = json!("outside");
    }
    let mut hover_template = format!("{}: %{{{}}}", axis_titles.0, category_key(orientation));
    hover_template.push_str(&format!("<br>{}: %{{{}}}", axis_titles.1, value_key(orientation)));
    if let Some(hover) = hover {
        trace["customdata"] = json!(hover.values);
        hover_template.push_str(&format!("<br>{}: %{{customdata}}", hover.name));
    }
    hover_template.push_str("<extra></extra>");
    trace["hovertemplate"] = json!(hover_template);
    vec![trace]
}

fn orientation_code(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Vertical => "v",
        Orientation::Horizontal => "h",
    }
}

fn category_key(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Vertical => "x",
        Orientation::Horizontal => "y",
    }
}

fn value_key(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Vertical => "y",
        Orientation::Horizontal => "x",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_bar_swaps_axes() {
        let fig = Figure::bar(
            "cities",
            vec![("Bangalore", 845.0), ("Pune", 768.0)],
            Orientation::Horizontal,
            ("City", "Jobs"),
        )
        .with_color_scale(ColorScale::Blues);
        let plotly = fig.to_plotly();
        let trace = &plotly["data"][0];
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["y"], json!(["Bangalore", "Pune"]));
        assert_eq!(trace["x"], json!([845.0, 768.0]));
        assert_eq!(trace["marker"]["colorscale"], "Blues");
        assert_eq!(plotly["layout"]["xaxis"]["title"]["text"], "Jobs");
    }

    #[test]
    fn test_category_colors_emit_one_trace_per_bar() {
        let fig = Figure::bar(
            "compare",
            vec![("Bangalore", 845.0), ("Mumbai", 758.0), ("Pune", 768.0)],
            Orientation::Vertical,
            ("City", "Jobs"),
        )
        .with_category_colors(Palette::Plotly)
        .with_title("Job Distribution");
        let plotly = fig.to_plotly();
        let data = plotly["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[1]["name"], "Mumbai");
        assert_eq!(plotly["layout"]["title"]["text"], "Job Distribution");
        assert_eq!(plotly["layout"]["showlegend"], true);
    }

    #[test]
    fn test_pie_palette_matches_slice_count() {
        let fig = Figure::pie("roles", vec![("A", 1.0), ("B", 2.0)], 0.4, Palette::Set3);
        let plotly = fig.to_plotly();
        assert_eq!(plotly["data"][0]["hole"], 0.4);
        assert_eq!(
            plotly["data"][0]["marker"]["colors"].as_array().unwrap().len(),
            2
        );
        assert_eq!(plotly["data"][0]["textinfo"], "percent+label");
    }

    #[test]
    fn test_hover_column_becomes_customdata() {
        let fig = Figure::bar("skills", vec![("AI", 987.0)], Orientation::Horizontal, ("Skill", "Jobs"))
            .with_hover("Percentage", vec![21.2]);
        let trace = &fig.to_plotly()["data"][0];
        assert_eq!(trace["customdata"], json!([21.2]));
        assert!(trace["hovertemplate"]
            .as_str()
            .unwrap()
            .contains("Percentage: %{customdata}"));
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(Palette::Plotly.take(12).len(), 12);
        assert_eq!(Palette::Plotly.take(11)[10], Palette::Plotly.colors()[0]);
    }
}
