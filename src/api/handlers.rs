//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{PopulationFilter, aggregate};
use crate::models::{AttendanceRecord, DateRange, Employee, LeaveEpisode};
use crate::resolution::{ShiftSlot, resolve_operational_day};

use super::request::{DashboardRequest, OperationalDayRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", post(dashboard_handler))
        .route("/operational-day", post(operational_day_handler))
        .with_state(state)
}

/// Response body for the `/operational-day` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalDayResponse {
    /// The resolved shift slot.
    pub shift: ShiftSlot,
    /// The display label of the shift slot.
    pub shift_label: String,
    /// The operational day the timestamp buckets into.
    pub operational_day: chrono::NaiveDate,
}

/// Handler for POST /dashboard.
///
/// Accepts a population snapshot plus pre-loaded attendance/leave batches
/// and returns the aggregated dashboard metrics.
async fn dashboard_handler(
    State(state): State<AppState>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_json(correlation_id, rejection),
    };

    // Convert request types to domain types
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let attendance: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();
    let leaves: Vec<LeaveEpisode> = request.leaves.into_iter().map(Into::into).collect();
    let filters: PopulationFilter = request.filters.map(Into::into).unwrap_or_default();

    // Malformed ranges are rejected here, before they reach the core.
    let range = match DateRange::new(request.range.start, request.range.end) {
        Ok(range) => range,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid range");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match aggregate(
        &employees,
        &attendance,
        &leaves,
        range,
        &filters,
        state.policy().config(),
    ) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                attendance_rows = attendance.len(),
                present = result.snapshot.present,
                absent = result.snapshot.absent,
                duration_us = duration.as_micros(),
                "Aggregation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Aggregation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /operational-day.
///
/// Buckets a wall-clock timestamp into its shift slot and operational day.
async fn operational_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<OperationalDayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_json(correlation_id, rejection),
    };

    let stamp = resolve_operational_day(request.timestamp, state.policy().config().shifts());
    info!(
        correlation_id = %correlation_id,
        timestamp = %request.timestamp,
        shift = %stamp.shift,
        operational_day = %stamp.operational_day,
        "Resolved operational day"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(OperationalDayResponse {
            shift: stamp.shift,
            shift_label: stamp.shift.label().to_string(),
            operational_day: stamp.operational_day,
        }),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to a 400 response.
fn reject_json(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
