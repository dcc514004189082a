//! Indian job market intelligence dashboard.
//!
//! A fixed snapshot of job-market statistics rendered as a five-section
//! dashboard: HTML pages with Plotly figures, plus a JSON API over the same
//! composed pages.

pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod recommender;
pub mod render;
pub mod shell;
pub mod snapshot;
pub mod views;
pub mod web;

pub use config::ConfigManager;
pub use error::DashboardError;
pub use snapshot::{snapshot, MetricSnapshot};
pub use views::{Section, Selections};
pub use web::{build_rocket, start_web_server};
