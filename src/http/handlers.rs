//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one store operation. Store calls are
//! synchronous and in-memory; at administrative request volumes they
//! complete fast enough to run directly on the async runtime.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    parse_date, parse_time, ConflictCheckResponse, ExamDto, ExamListResponse, HealthResponse,
    VenueAvailabilityQuery, VenueAvailabilityResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{Exam, ExamId};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        exams: state.store.statistics().total,
    }))
}

/// POST /v1/exams
pub async fn add_exam(
    State(state): State<AppState>,
    Json(dto): Json<ExamDto>,
) -> Result<(StatusCode, Json<ExamDto>), AppError> {
    let exam = Exam::try_from(dto).map_err(AppError::Store)?;
    let stored = state.store.add_exam(exam)?;
    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// GET /v1/exams
pub async fn list_exams(State(state): State<AppState>) -> HandlerResult<ExamListResponse> {
    Ok(Json(ExamListResponse::from_exams(state.store.all_exams())))
}

/// GET /v1/exams/{id}
pub async fn get_exam(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<ExamDto> {
    let exam = state.store.get_exam(&ExamId::new(id))?;
    Ok(Json(exam.into()))
}

/// PUT /v1/exams/{id}
pub async fn update_exam(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<ExamDto>,
) -> HandlerResult<ExamDto> {
    if dto.id != id {
        return Err(AppError::BadRequest(format!(
            "path id {id:?} does not match body id {:?}",
            dto.id
        )));
    }
    let exam = Exam::try_from(dto).map_err(AppError::Store)?;
    let stored = state.store.update_exam(exam)?;
    Ok(Json(stored.into()))
}

/// DELETE /v1/exams/{id}
pub async fn delete_exam(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.delete_exam(&ExamId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/exams/upcoming
pub async fn upcoming_exams(State(state): State<AppState>) -> HandlerResult<ExamListResponse> {
    Ok(Json(ExamListResponse::from_exams(
        state.store.upcoming_exams(),
    )))
}

/// GET /v1/exams/past
pub async fn past_exams(State(state): State<AppState>) -> HandlerResult<ExamListResponse> {
    Ok(Json(ExamListResponse::from_exams(state.store.past_exams())))
}

/// GET /v1/modules/{module_code}/exams
pub async fn exams_by_module(
    State(state): State<AppState>,
    Path(module_code): Path<String>,
) -> HandlerResult<ExamListResponse> {
    Ok(Json(ExamListResponse::from_exams(
        state.store.exams_by_module(&module_code),
    )))
}

/// GET /v1/batches/{batch_id}/exams
pub async fn exams_by_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> HandlerResult<ExamListResponse> {
    Ok(Json(ExamListResponse::from_exams(
        state.store.exams_by_batch(&batch_id),
    )))
}

/// POST /v1/conflicts/check
pub async fn check_conflict(
    State(state): State<AppState>,
    Json(dto): Json<ExamDto>,
) -> HandlerResult<ConflictCheckResponse> {
    let exam = Exam::try_from(dto).map_err(AppError::Store)?;
    Ok(Json(state.store.check_conflict(&exam).into()))
}

/// GET /v1/venues/{venue}/availability?date&start&end
pub async fn venue_availability(
    State(state): State<AppState>,
    Path(venue): Path<String>,
    Query(query): Query<VenueAvailabilityQuery>,
) -> HandlerResult<VenueAvailabilityResponse> {
    let date = parse_date(&query.date).map_err(AppError::Store)?;
    let start = parse_time(&query.start).map_err(AppError::Store)?;
    let end = parse_time(&query.end).map_err(AppError::Store)?;
    if start >= end {
        return Err(AppError::BadRequest(format!(
            "start {start} must be before end {end}"
        )));
    }

    let available = state.store.is_venue_available(&venue, date, start, end);
    Ok(Json(VenueAvailabilityResponse {
        venue,
        date: query.date,
        available,
    }))
}

/// GET /v1/statistics
pub async fn statistics(
    State(state): State<AppState>,
) -> HandlerResult<crate::store::ExamStatistics> {
    Ok(Json(state.store.statistics()))
}
