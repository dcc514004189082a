// src/web/handlers/api_handlers.rs
use crate::export::{self, Dataset};
use crate::recommender::{self, RecommendationCandidate, UserProfile};
use crate::shell::{self, Page};
use crate::snapshot::{MetricSnapshot, SkillShare};
use crate::views::Section;
use crate::web::types::*;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

pub async fn get_snapshot_handler(
    state: &State<DashboardState>,
) -> Json<DataResponse<&'static MetricSnapshot>> {
    Json(DataResponse::success(
        "Job market snapshot".to_string(),
        state.snapshot,
    ))
}

pub async fn get_dataset_handler(
    dataset: &str,
    state: &State<DashboardState>,
) -> Result<Json<DataResponse<Vec<export::Row>>>, ApiError> {
    let dataset: Dataset = dataset.parse().map_err(api_error)?;
    Ok(Json(DataResponse::success(
        format!("Dataset {}", dataset.name()),
        dataset.rows(state.snapshot),
    )))
}

pub async fn get_dataset_csv_handler(
    dataset: &str,
    state: &State<DashboardState>,
) -> Result<CsvResponse, ApiError> {
    let dataset: Dataset = dataset.parse().map_err(api_error)?;
    match export::to_csv(dataset, state.snapshot) {
        Ok(data) => {
            info!(dataset = dataset.name(), "Exporting dataset as CSV");
            Ok(CsvResponse {
                data,
                filename: format!("{}.csv", dataset.name()),
            })
        }
        Err(e) => {
            error!("CSV export failed for {}: {:#}", dataset.name(), e);
            Err(status::Custom(
                Status::InternalServerError,
                Json(StandardErrorResponse::new(
                    "CSV export failed".to_string(),
                    "EXPORT_ERROR".to_string(),
                    vec!["Try the JSON endpoint instead".to_string()],
                )),
            ))
        }
    }
}

pub async fn get_skill_shares_handler(
    state: &State<DashboardState>,
) -> Json<DataResponse<Vec<SkillShare>>> {
    Json(DataResponse::success(
        "Skill share of all analyzed jobs".to_string(),
        state.snapshot.skill_shares(),
    ))
}

pub async fn get_view_handler(
    slug: &str,
    widgets: WidgetQuery,
    state: &State<DashboardState>,
) -> Result<Json<DataResponse<Page>>, ApiError> {
    let section: Section = slug.parse().map_err(|e| {
        warn!("Rejected view request: {}", e);
        api_error(e)
    })?;
    let page = shell::compose(
        &state.settings.page_title,
        section,
        state.snapshot,
        &widgets.into_selections(),
    );
    Ok(Json(DataResponse::success(
        format!("{} view", section.label()),
        page,
    )))
}

pub async fn recommend_handler(
    request: Json<RecommendationRequest>,
) -> Result<Json<DataResponse<Vec<RecommendationCandidate>>>, ApiError> {
    let profile = UserProfile::from(request.into_inner());
    let candidates = recommender::recommend(&profile).map_err(api_error)?;
    Ok(Json(DataResponse::success(
        format!(
            "Searching for jobs matching {} skills...",
            profile.skills.len()
        ),
        candidates,
    )))
}
