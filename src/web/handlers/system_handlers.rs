// src/web/handlers/system_handlers.rs
use crate::views::Section;
use crate::web::types::*;

use rocket::serde::json::Json;
use tracing::info;

pub async fn get_sections_handler() -> Json<DataResponse<Vec<SectionInfo>>> {
    let sections = Section::ALL
        .iter()
        .map(|section| SectionInfo {
            slug: section.slug(),
            label: section.label(),
            icon: section.icon(),
        })
        .collect();
    Json(DataResponse::success(
        "Dashboard sections".to_string(),
        sections,
    ))
}

pub async fn health_handler() -> Json<TextResponse> {
    info!("Health check");
    Json(TextResponse::success("OK".to_string()))
}
