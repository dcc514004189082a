// src/render/mod.rs
pub mod html;

pub use html::render_page;

use crate::shell::Page;
use anyhow::{Context, Result};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

/// Renders a page in the requested format.
pub fn render(page: &Page, format: OutputFormat, plotly_cdn: &str) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(render_page(page, plotly_cdn)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(page).context("Failed to serialize page as JSON")
        }
    }
}
