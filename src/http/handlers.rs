//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    HealthResponse, SaveTimetableRequest, SaveTimetableResponse, StoredTimetable,
    TimetableListResponse, TimetableRequest, TimetableResult,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::TimetableId;
use crate::db::models::NewTimetable;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Generation
// =============================================================================

/// POST /v1/timetables/generate
///
/// Run the slot allocator for the submitted teaching load and return the
/// placement result. Shortfall is reported via `unassignedSessions` in the
/// body, never as an error status.
pub async fn generate_timetable(
    State(_state): State<AppState>,
    Json(request): Json<TimetableRequest>,
) -> HandlerResult<TimetableResult> {
    if request.subjects.is_empty() {
        return Err(AppError::BadRequest(
            "At least one subject is required".to_string(),
        ));
    }
    if request.days.is_empty() {
        return Err(AppError::BadRequest(
            "Select at least one day of the week".to_string(),
        ));
    }
    if request.periods_per_day < 1 {
        return Err(AppError::BadRequest(
            "At least one period per day is required".to_string(),
        ));
    }
    if request.section_count < 1 {
        return Err(AppError::BadRequest(
            "At least one section is required".to_string(),
        ));
    }

    // The allocator is pure CPU work; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || services::generate_timetable(&request))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(result))
}

// =============================================================================
// Record CRUD
// =============================================================================

/// POST /v1/timetables
///
/// Save a timetable record. The payload is stored verbatim; a non-empty id in
/// the body overwrites that record.
pub async fn save_timetable(
    State(state): State<AppState>,
    Json(request): Json<SaveTimetableRequest>,
) -> Result<(StatusCode, Json<SaveTimetableResponse>), AppError> {
    let Some(payload) = request.payload else {
        return Err(AppError::BadRequest("Invalid payload".to_string()));
    };

    let record = NewTimetable {
        id: request.id,
        teacher_name: request.teacher_name,
        payload,
    };
    let id = db_services::store_timetable(state.repository.as_ref(), record).await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveTimetableResponse { id: id.to_string() }),
    ))
}

/// GET /v1/timetables
///
/// List summaries of all saved timetables.
pub async fn list_timetables(
    State(state): State<AppState>,
) -> HandlerResult<TimetableListResponse> {
    let timetables = db_services::list_timetables(state.repository.as_ref()).await?;
    let total = timetables.len();

    Ok(Json(TimetableListResponse { timetables, total }))
}

/// GET /v1/timetables/{id}
///
/// Fetch a saved record verbatim.
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<StoredTimetable> {
    let record =
        db_services::get_timetable(state.repository.as_ref(), &TimetableId::new(id)).await?;
    Ok(Json(record))
}

// =============================================================================
// CSV Export
// =============================================================================

/// POST /v1/timetables/export
///
/// Tabulate the submitted timetable result as CSV.
pub async fn export_timetable(
    State(_state): State<AppState>,
    Json(result): Json<TimetableResult>,
) -> Result<Response, AppError> {
    let csv = services::timetable_to_csv(&result)?;
    Ok(csv_response(csv))
}

/// GET /v1/timetables/{id}/export
///
/// Fetch a saved record and tabulate its payload as CSV. Fails with 400 when
/// the stored payload is not a timetable result.
pub async fn export_stored_timetable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record =
        db_services::get_timetable(state.repository.as_ref(), &TimetableId::new(id)).await?;
    let result: TimetableResult = serde_json::from_value(record.payload)
        .map_err(|e| AppError::BadRequest(format!("Stored payload is not a timetable: {}", e)))?;

    let csv = services::timetable_to_csv(&result)?;
    Ok(csv_response(csv))
}

fn csv_response(csv: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"timetable.csv\"",
            ),
        ],
        csv,
    )
        .into_response()
}
