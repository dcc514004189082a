// src/render/html.rs
//! Self-contained HTML rendering of a composed page.
//!
//! Widgets become one GET form around the section body, so every
//! interaction re-renders the whole page with the new query string.

use crate::charts::Figure;
use crate::shell::{Page, Sidebar};
use crate::views::{Column, Element, Metric, Tone, Widget};

pub const APPLIED_FIELD: &str = "applied";
pub const SECTION_FIELD: &str = "section";

/// Renders `page` as a complete HTML document.
pub fn render_page(page: &Page, plotly_cdn: &str) -> String {
    let figures = page.figures();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{cdn}" charset="utf-8"></script>
</head>
<body>
    <aside class="sidebar">{sidebar}</aside>
    <main class="main">
        {header}
        <form method="get" action="/" class="section-form">
            <input type="hidden" name="{section_field}" value="{slug}">
            <input type="hidden" name="{applied_field}" value="true">
            {body}
        </form>
        {footer}
    </main>
    <script>{plots}</script>
</body>
</html>"#,
        title = html_escape(&page.title),
        css = inline_css(),
        cdn = html_escape(plotly_cdn),
        sidebar = render_sidebar(&page.sidebar),
        header = render_elements(&page.header),
        section_field = SECTION_FIELD,
        applied_field = APPLIED_FIELD,
        slug = page.section.slug(),
        body = render_elements(&page.body),
        footer = render_footer(&page.footer),
        plots = render_plot_calls(&figures),
    )
}

fn render_sidebar(sidebar: &Sidebar) -> String {
    let nav: String = sidebar
        .nav
        .iter()
        .map(|item| {
            format!(
                r#"<label class="nav-item{active}"><input type="radio" name="nav" {checked} onclick="location.href='/?{field}={slug}'"> <a href="/?{field}={slug}">{icon} {label}</a></label>"#,
                active = if item.active { " active" } else { "" },
                checked = if item.active { "checked" } else { "" },
                field = SECTION_FIELD,
                slug = item.slug,
                icon = item.icon,
                label = html_escape(item.label),
            )
        })
        .collect();

    let info: String = sidebar
        .info
        .iter()
        .map(|line| format!("<p>{}</p>", html_escape(line)))
        .collect();

    format!(
        r#"<img src="{img}" width="150" alt="Flag of India">
<h1>{title}</h1>
<hr>
<p class="prompt">{prompt}</p>
<nav>{nav}</nav>
<hr>
<div class="callout info">{info}</div>"#,
        img = html_escape(sidebar.image_url),
        title = html_escape(&sidebar.title),
        prompt = html_escape(sidebar.prompt),
        nav = nav,
        info = info,
    )
}

fn render_footer(lines: &[String]) -> String {
    let body: String = lines
        .iter()
        .map(|line| format!("<p>{}</p>", html_escape(line)))
        .collect();
    format!(r#"<hr><footer class="footer">{}</footer>"#, body)
}

pub fn render_elements(elements: &[Element]) -> String {
    elements.iter().map(render_element).collect()
}

fn render_element(element: &Element) -> String {
    match element {
        Element::Header { text } => format!("<h2>{}</h2>\n", html_escape(text)),
        Element::Subheader { text } => format!("<h3>{}</h3>\n", html_escape(text)),
        Element::Heading { text } => format!("<h4>{}</h4>\n", html_escape(text)),
        Element::Paragraph { text } => format!("<p>{}</p>\n", html_escape(text)),
        Element::Metric(metric) => render_metric(metric),
        Element::Chart(figure) => format!(
            "<div class=\"chart\" id=\"{}\" style=\"height:{}px\"></div>\n",
            html_escape(&figure.id),
            figure.height
        ),
        Element::Callout { tone, title, lines } => render_callout(*tone, title.as_deref(), lines),
        Element::Divider => "<hr>\n".to_string(),
        Element::Columns { columns } => render_columns(columns),
        Element::Widget(widget) => render_widget(widget),
    }
}

fn render_metric(metric: &Metric) -> String {
    let delta = metric
        .delta
        .as_deref()
        .map(|d| format!(r#"<div class="metric-delta">{}</div>"#, html_escape(d)))
        .unwrap_or_default();
    format!(
        r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div>{}</div>
"#,
        html_escape(&metric.label),
        html_escape(&metric.value),
        delta
    )
}

fn render_callout(tone: Tone, title: Option<&str>, lines: &[String]) -> String {
    let class = match tone {
        Tone::Success => "success",
        Tone::Info => "info",
        Tone::Warning => "warning",
        Tone::Error => "error",
    };
    let body = match (title, lines) {
        (None, [single]) => format!("<p>{}</p>", html_escape(single)),
        _ => {
            let items: String = lines
                .iter()
                .map(|line| format!("<li>{}</li>", html_escape(line.trim_start_matches("- "))))
                .collect();
            format!("<ul>{}</ul>", items)
        }
    };
    let heading = title
        .map(|t| format!("<strong>{}</strong>", html_escape(t)))
        .unwrap_or_default();
    format!(
        "<div class=\"callout {}\" role=\"{}\">{}{}</div>\n",
        class,
        if tone == Tone::Error { "alert" } else { "note" },
        heading,
        body
    )
}

fn render_columns(columns: &[Column]) -> String {
    let inner: String = columns
        .iter()
        .map(|column| {
            format!(
                "<div class=\"column\" style=\"flex:{}\">{}</div>",
                column.weight,
                render_elements(&column.elements)
            )
        })
        .collect();
    format!("<div class=\"columns\">{}</div>\n", inner)
}

fn render_widget(widget: &Widget) -> String {
    match widget {
        Widget::MultiSelect {
            name,
            label,
            options,
            selected,
        } => {
            let opts: String = options
                .iter()
                .map(|option| {
                    format!(
                        "<option value=\"{v}\"{sel}>{v}</option>",
                        v = html_escape(option),
                        sel = if selected.contains(option) { " selected" } else { "" }
                    )
                })
                .collect();
            format!(
                r#"<label class="widget">{label}<select multiple name="{name}" size="{size}" onchange="this.form.submit()">{opts}</select></label>
"#,
                label = html_escape(label),
                name = html_escape(name),
                size = options.len().min(8),
                opts = opts,
            )
        }
        Widget::Slider {
            name,
            label,
            min,
            max,
            value,
        } => format!(
            r#"<label class="widget">{label} <output>{value}</output><input type="range" name="{name}" min="{min}" max="{max}" value="{value}" onchange="this.form.submit()"></label>
"#,
            label = html_escape(label),
            name = html_escape(name),
            min = min,
            max = max,
            value = value,
        ),
        Widget::Button { name, label } => format!(
            r#"<button type="submit" class="primary" name="{}" value="true">{}</button>
"#,
            html_escape(name),
            html_escape(label)
        ),
    }
}

fn render_plot_calls(figures: &[&Figure]) -> String {
    figures
        .iter()
        .map(|figure| {
            let plotly = figure.to_plotly();
            format!(
                "Plotly.newPlot({id}, {data}, {layout}, {{responsive: true}});\n",
                id = script_json(&serde_json::Value::String(figure.id.clone())),
                data = script_json(&plotly["data"]),
                layout = script_json(&plotly["layout"]),
            )
        })
        .collect()
}

/// JSON safe to inline inside a `<script>` element.
fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; display: flex; font-family: "Source Sans Pro", sans-serif; color: #262730; }
.sidebar { width: 260px; min-height: 100vh; background: #f0f2f6; padding: 24px; box-sizing: border-box; }
.sidebar h1 { font-size: 1.4rem; }
.sidebar .prompt { font-size: 0.9rem; margin-bottom: 4px; }
.nav-item { display: block; padding: 4px 0; }
.nav-item a { color: inherit; text-decoration: none; }
.nav-item.active a { font-weight: bold; }
.main { flex: 1; padding: 24px 48px; }
.main > h2:first-child { font-size: 3rem; color: #FF9933; text-align: center; }
.main > h3:nth-child(2) { font-size: 1.2rem; color: #138808; text-align: center; }
.columns { display: flex; gap: 24px; }
.column { min-width: 0; }
.metric { padding: 8px 0; }
.metric-label { font-size: 0.9rem; }
.metric-value { font-size: 2rem; }
.metric-delta { font-size: 0.85rem; color: #09ab3b; }
.callout { border-radius: 8px; padding: 12px 16px; margin: 12px 0; }
.callout.success { background: #dff5e3; }
.callout.info { background: #e1effe; }
.callout.warning { background: #fff6d6; }
.callout.error { background: #ffe1e1; }
.widget { display: block; margin: 12px 0; }
.widget select, .widget input { display: block; width: 100%; margin-top: 4px; }
button.primary { background: #ff4b4b; color: white; border: 0; border-radius: 6px; padding: 8px 16px; cursor: pointer; }
.footer { text-align: center; color: gray; }
"#
}
