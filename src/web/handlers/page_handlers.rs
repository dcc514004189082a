// src/web/handlers/page_handlers.rs
use crate::render::render_page;
use crate::shell;
use crate::views::Section;
use crate::web::types::{DashboardState, WidgetQuery};
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::status;
use rocket::State;
use tracing::{info, warn};

pub async fn dashboard_page_handler(
    section: Option<&str>,
    widgets: WidgetQuery,
    state: &State<DashboardState>,
) -> Result<RawHtml<String>, status::Custom<RawHtml<String>>> {
    let section = match section.map(str::parse::<Section>).transpose() {
        Ok(section) => section.unwrap_or_default(),
        Err(e) => {
            warn!("Rejected page request: {}", e);
            return Err(status::Custom(Status::NotFound, RawHtml(not_found_page(&e.to_string()))));
        }
    };

    let selections = widgets.into_selections();
    info!(
        section = section.slug(),
        submitted = selections.submitted,
        "Rendering dashboard page"
    );

    let page = shell::compose(
        &state.settings.page_title,
        section,
        state.snapshot,
        &selections,
    );
    Ok(RawHtml(render_page(&page, &state.settings.plotly_cdn)))
}

fn not_found_page(message: &str) -> String {
    let links: String = Section::ALL
        .iter()
        .map(|s| format!(r#"<li><a href="/?section={}">{}</a></li>"#, s.slug(), s.label()))
        .collect();
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Not found</title></head>\
         <body><h1>Not found</h1><p>{}</p><ul>{}</ul></body></html>",
        message.replace('<', "&lt;").replace('>', "&gt;"),
        links
    )
}
