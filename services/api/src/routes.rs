use crate::infra::{deserialize_optional_date, garment_input_from_json, AppState, EngineState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use uniformes::error::AppError;
use uniformes::workflows::uniforms::{
    EmployeeRow, RosterImporter, UniformAssessment,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AssessRequest {
    #[serde(default)]
    pub(crate) employee: String,
    #[serde(default)]
    pub(crate) document_id: String,
    #[serde(default)]
    pub(crate) occupation: String,
    pub(crate) location: String,
    #[serde(default)]
    pub(crate) size_upper: String,
    #[serde(default)]
    pub(crate) size_lower: String,
    #[serde(default)]
    pub(crate) quantities: serde_json::Map<String, serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) assessed_on: Option<NaiveDate>,
    /// Full roster CSV export; when present, the single-employee fields
    /// above are ignored.
    #[serde(default)]
    pub(crate) roster_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessResponse {
    pub(crate) location: String,
    pub(crate) assessed_on: NaiveDate,
    pub(crate) data_source: AssessDataSource,
    pub(crate) assessments: Vec<UniformAssessment>,
    pub(crate) grand_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AssessDataSource {
    Roster,
    Single,
}

pub(crate) fn with_uniform_routes(state: Arc<EngineState>) -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/uniforms/assess",
            axum::routing::post(assess_endpoint),
        )
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assess_endpoint(
    State(state): State<Arc<EngineState>>,
    Json(payload): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, AppError> {
    let AssessRequest {
        employee,
        document_id,
        occupation,
        location,
        size_upper,
        size_lower,
        quantities,
        assessed_on,
        roster_csv,
    } = payload;

    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());
    let catalog = state.catalog.snapshot();

    let (rows, data_source) = if let Some(csv) = roster_csv {
        let rows = RosterImporter::from_reader(Cursor::new(csv.into_bytes()))?;
        (rows, AssessDataSource::Roster)
    } else {
        let row = EmployeeRow {
            name: employee,
            document_id,
            raw_occupation: occupation,
            size_upper,
            size_lower,
            garments: garment_input_from_json(&quantities),
        };
        (vec![row], AssessDataSource::Single)
    };

    let batch = state
        .engine
        .assess_roster(&catalog, &rows, &location, assessed_on, None);

    Ok(Json(AssessResponse {
        location: batch.location,
        assessed_on: batch.assessed_on,
        data_source,
        assessments: batch.assessments,
        grand_total: batch.grand_total,
    }))
}
