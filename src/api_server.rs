// Axum server for the maize planting advisor
//
// Purpose: serve the localized report page and a JSON evaluation API
// Routes: GET /health, GET /, GET|POST /api/evaluate

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::EvalError;
use crate::evaluator::{evaluate, ScenarioInput};
use crate::i18n::Language;
use crate::report::{EvaluationEnvelope, HtmlFormatter, JsonFormatter, PageView, ReportView};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Language from the request, or the configured default
    fn language(&self, requested: Option<&str>) -> Result<Language, EvalError> {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(code) => code.parse(),
            None => Ok(self.config.default_language),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML report page
        .route("/", get(index_page))

        // JSON API
        .route("/api/evaluate", get(evaluate_query).post(evaluate_body))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

/// Query string of the HTML page; every field is optional.
/// Fields arrive as text so a cleared form input (`rainfall_mm=`) reads as missing.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub rainfall_mm: Option<String>,
    pub avg_temp_c: Option<String>,
    pub soil: Option<String>,
    pub days_since_planting: Option<String>,
    pub lang: Option<String>,
}

impl PageQuery {
    fn is_complete(&self) -> bool {
        [&self.rainfall_mm, &self.avg_temp_c, &self.soil, &self.days_since_planting]
            .into_iter()
            .all(|field| non_empty(field).is_some())
    }

    /// Scenario from the query, missing fields taken from the form defaults
    fn scenario(&self) -> Result<ScenarioInput, EvalError> {
        let defaults = ScenarioInput::default();
        let soil_type = match non_empty(&self.soil) {
            Some(soil) => soil.parse()?,
            None => defaults.soil_type,
        };
        Ok(ScenarioInput::clamped(
            parse_field("rainfall_mm", &self.rainfall_mm)?.unwrap_or(defaults.rainfall_mm),
            parse_field("avg_temp_c", &self.avg_temp_c)?.unwrap_or(defaults.avg_temp_c),
            soil_type,
            parse_field("days_since_planting", &self.days_since_planting)?
                .unwrap_or_else(|| i64::from(defaults.days_since_planting)),
        ))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parse an optional text field; blank counts as missing
fn parse_field<T: FromStr>(name: &'static str, field: &Option<String>) -> Result<Option<T>, EvalError> {
    non_empty(field)
        .map(|raw| raw.parse().map_err(|_| EvalError::invalid_input(name, raw)))
        .transpose()
}

/// Scenario for the JSON API (query string or body).
/// Days are signed so negative values clamp like the other numbers.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub rainfall_mm: f64,
    pub avg_temp_c: f64,
    pub soil: String,
    pub days_since_planting: i64,
    pub lang: Option<String>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn index_page(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let language = state.language(query.lang.as_deref())?;
    let input = query.scenario()?;

    let result = if query.is_complete() {
        tracing::info!(
            rainfall_mm = input.rainfall_mm,
            avg_temp_c = input.avg_temp_c,
            soil = %input.soil_type,
            days = input.days_since_planting,
            "Rendering report page"
        );
        Some(evaluate(&input))
    } else {
        None
    };

    let page = PageView::build(&input, result.as_ref(), language);
    Ok(Html(HtmlFormatter::format(&page)?))
}

async fn evaluate_query(
    State(state): State<AppState>,
    request: Result<Query<EvaluateRequest>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(request) = request?;
    evaluate_request(&state, request)
}

async fn evaluate_body(
    State(state): State<AppState>,
    request: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = request?;
    evaluate_request(&state, request)
}

fn evaluate_request(state: &AppState, request: EvaluateRequest) -> Result<Json<serde_json::Value>, AppError> {
    let language = state.language(request.lang.as_deref())?;
    let input = ScenarioInput::parse(
        request.rainfall_mm,
        request.avg_temp_c,
        &request.soil,
        request.days_since_planting,
    )?;

    let result = evaluate(&input);
    let report = ReportView::build(&result, language);
    tracing::debug!("Evaluated scenario {:?} ({})", input, language);

    let envelope = EvaluationEnvelope {
        input: &input,
        result: &result,
        report: &report,
    };
    Ok(Json(JsonFormatter::to_value(&envelope).map_err(EvalError::from)?))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<EvalError> for AppError {
    fn from(err: EvalError) -> Self {
        if err.is_client_error() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

// Extractor rejections become 400s with the JSON error body
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::SoilType;

    #[test]
    fn test_page_query_completeness() {
        let mut query = PageQuery {
            rainfall_mm: Some("80".into()),
            avg_temp_c: Some("22.5".into()),
            soil: Some("arenoso".into()),
            days_since_planting: None,
            lang: None,
        };
        assert!(!query.is_complete());

        query.days_since_planting = Some(" ".into());
        assert!(!query.is_complete());

        query.days_since_planting = Some("200".into());
        assert!(query.is_complete());

        let input = query.scenario().unwrap();
        assert_eq!(input.soil_type, SoilType::Sandy);
        assert_eq!(input.days_since_planting, 120);
    }

    #[test]
    fn test_empty_query_uses_form_defaults() {
        let input = PageQuery::default().scenario().unwrap();
        assert_eq!(input, ScenarioInput::default());
    }

    #[test]
    fn test_blank_fields_fall_back_to_defaults() {
        let query = PageQuery {
            rainfall_mm: Some(String::new()),
            days_since_planting: Some("-5".into()),
            ..PageQuery::default()
        };
        let input = query.scenario().unwrap();
        assert_eq!(input.rainfall_mm, 120.0);
        assert_eq!(input.days_since_planting, 0);
    }

    #[test]
    fn test_unparsable_field_is_invalid_input() {
        let query = PageQuery {
            avg_temp_c: Some("warm".into()),
            ..PageQuery::default()
        };
        let err = query.scenario().unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput { field: "avg_temp_c", .. }));
    }

    #[test]
    fn test_language_resolution() {
        let state = AppState::new(ServerConfig::default());
        assert_eq!(state.language(None).unwrap(), Language::Pt);
        assert_eq!(state.language(Some("")).unwrap(), Language::Pt);
        assert_eq!(state.language(Some("fr")).unwrap(), Language::Fr);
        assert!(state.language(Some("xx")).is_err());
    }

    #[test]
    fn test_error_status_mapping() {
        let response = AppError::from(EvalError::invalid_input("soil_type", "peat")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(EvalError::Render("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
