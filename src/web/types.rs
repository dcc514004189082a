// src/web/types.rs
use crate::config::DashboardSettings;
use crate::error::DashboardError;
use crate::recommender::{UserProfile, DEFAULT_MIN_SALARY};
use crate::snapshot::MetricSnapshot;
use crate::views::Selections;
use rocket::form::FromForm;
use rocket::http::{ContentType, Status};
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{Request, Response};

/// Shared, read-only server state.
pub struct DashboardState {
    pub snapshot: &'static MetricSnapshot,
    pub settings: DashboardSettings,
}

pub struct CsvResponse {
    pub data: String,
    pub filename: String,
}

impl<'r> Responder<'r, 'static> for CsvResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::CSV)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

/// Widget values as they arrive in the page query string.
#[derive(Debug, Default, FromForm)]
pub struct WidgetQuery {
    pub city: Vec<String>,
    pub skill: Vec<String>,
    pub preferred_city: Vec<String>,
    /// Kept raw so out-of-range numbers saturate instead of being dropped.
    pub min_salary: Option<String>,
    pub submit: Option<bool>,
    /// Set by the page form; an empty multi-select then means "nothing
    /// selected" rather than "defaults".
    pub applied: Option<bool>,
}

impl WidgetQuery {
    pub fn into_selections(self) -> Selections {
        let applied = self.applied.unwrap_or(false);
        let pick = |values: Vec<String>| {
            if applied || !values.is_empty() {
                Some(values)
            } else {
                None
            }
        };
        Selections {
            compare_cities: pick(self.city),
            skills: pick(self.skill),
            preferred_cities: pick(self.preferred_city),
            min_salary: self.min_salary.as_deref().and_then(parse_slider),
            submitted: self.submit.unwrap_or(false),
        }
    }
}

/// Slider value from the query string. Numbers beyond `i64` saturate;
/// anything non-numeric falls back to the widget default.
fn parse_slider(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(|v| v as i64)
    })
}

#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_cities: Vec<String>,
    #[serde(default)]
    pub min_salary: Option<i64>,
}

impl From<RecommendationRequest> for UserProfile {
    fn from(request: RecommendationRequest) -> Self {
        UserProfile::new(
            request.skills,
            request.preferred_cities,
            request
                .min_salary
                .unwrap_or(i64::from(DEFAULT_MIN_SALARY)),
        )
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SectionInfo {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

/// Error envelope paired with its HTTP status.
pub type ApiError = status::Custom<Json<StandardErrorResponse>>;

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn from_error(err: &DashboardError) -> Self {
        Self::new(
            err.to_string(),
            err.error_code().to_string(),
            err.suggestions(),
        )
    }
}

pub fn status_for(err: &DashboardError) -> Status {
    match err {
        DashboardError::EmptySkillSelection => Status::UnprocessableEntity,
        DashboardError::UnknownSection(_) | DashboardError::UnknownDataset(_) => Status::NotFound,
    }
}

pub fn api_error(err: DashboardError) -> ApiError {
    status::Custom(status_for(&err), Json(StandardErrorResponse::from_error(&err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_marker_keeps_defaults() {
        let selections = <WidgetQuery as Default>::default().into_selections();
        assert_eq!(selections, Selections::default());
    }

    #[test]
    fn test_applied_marker_means_explicit_empty() {
        let query = WidgetQuery {
            applied: Some(true),
            ..Default::default()
        };
        let selections = query.into_selections();
        assert_eq!(selections.compare_cities, Some(vec![]));
        assert_eq!(selections.skills, Some(vec![]));
        assert!(!selections.submitted);
    }

    #[test]
    fn test_values_without_marker_are_used() {
        let query = WidgetQuery {
            city: vec!["Delhi".into()],
            submit: Some(true),
            ..Default::default()
        };
        let selections = query.into_selections();
        assert_eq!(selections.compare_cities, Some(vec!["Delhi".to_string()]));
        assert_eq!(selections.skills, None);
        assert!(selections.submitted);
    }

    #[test]
    fn test_slider_value_saturates() {
        assert_eq!(parse_slider("25"), Some(25));
        assert_eq!(parse_slider(" 7 "), Some(7));
        assert_eq!(parse_slider("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_slider("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_slider("12.9"), Some(12));
        assert_eq!(parse_slider("lots"), None);
        assert_eq!(parse_slider("NaN"), None);

        let query = WidgetQuery {
            min_salary: Some("99999999999999999999".into()),
            ..Default::default()
        };
        let profile = crate::views::recommender::profile_from(&query.into_selections());
        assert_eq!(profile.min_salary, 50);
    }

    #[test]
    fn test_missing_skills_field_is_empty_selection() {
        let request: RecommendationRequest = rocket::serde::json::from_str("{}").unwrap();
        assert!(request.skills.is_empty());
        let profile = UserProfile::from(request);
        assert_eq!(
            crate::recommender::recommend(&profile),
            Err(DashboardError::EmptySkillSelection)
        );
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            status_for(&DashboardError::EmptySkillSelection),
            Status::UnprocessableEntity
        );
        assert_eq!(
            status_for(&DashboardError::UnknownDataset("x".into())),
            Status::NotFound
        );
    }
}
