// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::config::ConfigManager;
use crate::snapshot;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::content::RawHtml;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Data, Request, Response, Rocket, State};
use tracing::{debug, info};
use uuid::Uuid;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Per-request id, echoed as `X-Request-Id`.
#[derive(Clone, Copy)]
pub struct RequestId(pub Uuid);

pub struct RequestTracing;

#[rocket::async_trait]
impl Fairing for RequestTracing {
    fn info(&self) -> Info {
        Info {
            name: "Request id and access log",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        let id = request.local_cache(|| RequestId(Uuid::new_v4()));
        debug!(request_id = %id.0, method = %request.method(), uri = %request.uri(), "Request received");
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let id = request.local_cache(|| RequestId(Uuid::new_v4()));
        response.set_header(Header::new("X-Request-Id", id.0.to_string()));
        info!(
            request_id = %id.0,
            method = %request.method(),
            uri = %request.uri(),
            status = response.status().code,
            "Request handled"
        );
    }
}

// Dashboard page

#[get("/?<section>&<widgets..>")]
pub async fn dashboard_page(
    section: Option<&str>,
    widgets: WidgetQuery,
    state: &State<DashboardState>,
) -> Result<RawHtml<String>, status::Custom<RawHtml<String>>> {
    handlers::dashboard_page_handler(section, widgets, state).await
}

// JSON API

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[get("/sections")]
pub async fn get_sections() -> Json<DataResponse<Vec<SectionInfo>>> {
    handlers::get_sections_handler().await
}

#[get("/snapshot")]
pub async fn get_snapshot(
    state: &State<DashboardState>,
) -> Json<DataResponse<&'static snapshot::MetricSnapshot>> {
    handlers::get_snapshot_handler(state).await
}

#[get("/snapshot/<dataset>")]
pub async fn get_dataset(
    dataset: &str,
    state: &State<DashboardState>,
) -> Result<Json<DataResponse<Vec<crate::export::Row>>>, ApiError> {
    handlers::get_dataset_handler(dataset, state).await
}

#[get("/snapshot/<dataset>/csv")]
pub async fn get_dataset_csv(
    dataset: &str,
    state: &State<DashboardState>,
) -> Result<CsvResponse, ApiError> {
    handlers::get_dataset_csv_handler(dataset, state).await
}

#[get("/skills/shares")]
pub async fn get_skill_shares(
    state: &State<DashboardState>,
) -> Json<DataResponse<Vec<snapshot::SkillShare>>> {
    handlers::get_skill_shares_handler(state).await
}

#[get("/views/<slug>?<widgets..>")]
pub async fn get_view(
    slug: &str,
    widgets: WidgetQuery,
    state: &State<DashboardState>,
) -> Result<Json<DataResponse<crate::shell::Page>>, ApiError> {
    handlers::get_view_handler(slug, widgets, state).await
}

#[post("/recommendations", data = "<request>")]
pub async fn recommend(
    request: Json<RecommendationRequest>,
) -> Result<Json<DataResponse<Vec<crate::recommender::RecommendationCandidate>>>, ApiError> {
    handlers::recommend_handler(request).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("No route for {}", request.uri()),
        "NOT_FOUND".to_string(),
        vec!["GET /api/sections lists the dashboard sections".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec!["Send {\"skills\": [...]} with at least one skill".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assemble the Rocket application without launching it.
pub fn build_rocket(config: &ConfigManager) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address))
        .merge(("port", config.server.port))
        .merge(("log_level", "off"));

    let state = DashboardState {
        snapshot: snapshot::snapshot(),
        settings: config.dashboard.clone(),
    };

    rocket::custom(figment)
        .attach(Cors)
        .attach(RequestTracing)
        .manage(state)
        .register("/api", catchers![bad_request, not_found, unprocessable, internal_error])
        .mount("/", routes![dashboard_page, options])
        .mount(
            "/api",
            routes![
                health,
                get_sections,
                get_snapshot,
                get_dataset,
                get_dataset_csv,
                get_skill_shares,
                get_view,
                recommend,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    info!("Starting Indian Job Market Intelligence dashboard");
    info!(
        "Server: http://{}:{}",
        config.server.address, config.server.port
    );

    build_rocket(&config)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Dashboard server failed: {}", e))?;

    Ok(())
}
