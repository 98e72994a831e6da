//! HTTP request handlers for the roster engine API.
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
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Shift, StaffMember, TimeRange, Timesheet};
use crate::payroll::aggregate_week;
use crate::validation::{ShiftProposal, approve_shift, edit_shift};

use super::request::{PayrollRequest, ShiftApprovalRequest};
use super::response::{ApiError, ApiErrorResponse, ShiftApprovalResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster/shifts", post(shift_approval_handler))
        .route("/payroll/weekly", post(weekly_payroll_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
    }
}

/// Handler for POST /roster/shifts.
///
/// Validates a proposed shift against operating hours, availability and the
/// existing roster, and returns the approved shift record on success.
async fn shift_approval_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftApprovalRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift approval request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let date = request.week.date_of(request.day_of_week);
    let existing: Vec<Shift> = request
        .existing_shifts
        .iter()
        .cloned()
        .map(Into::into)
        .collect();
    let hours = state.operating_hours();
    let proposed = TimeRange::new(request.start_time, request.end_time);

    let start_time = Instant::now();
    let outcome = match &request.editing_shift_id {
        Some(editing_id) => {
            let Some(previous) = existing.iter().find(|shift| shift.id == *editing_id) else {
                warn!(
                    correlation_id = %correlation_id,
                    editing_shift_id = %editing_id,
                    "Editing shift not present in existing shifts"
                );
                return (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(ApiError::validation_error(format!(
                        "editing shift '{}' not found among existing shifts",
                        editing_id
                    ))),
                )
                    .into_response();
            };
            edit_shift(
                previous,
                proposed,
                &request.availability,
                &existing,
                hours,
                &request.admin_id,
                Utc::now(),
            )
            .map(|(shift, audit)| ShiftApprovalResponse {
                shift,
                audit: Some(audit),
            })
        }
        None => {
            let proposal = ShiftProposal {
                staff_id: request.staff_id.clone(),
                date,
                start_time: request.start_time,
                end_time: request.end_time,
            };
            approve_shift(
                Uuid::new_v4().to_string(),
                &proposal,
                &request.availability,
                &existing,
                hours,
                &request.admin_id,
                Utc::now(),
            )
            .map(|shift| ShiftApprovalResponse { shift, audit: None })
        }
    };

    match outcome {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                staff_id = %response.shift.staff_id,
                shift_id = %response.shift.id,
                date = %response.shift.date,
                duration_us = duration.as_micros(),
                "Shift validated and approved"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                staff_id = %request.staff_id,
                error = %err,
                "Shift validation failed"
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

/// Handler for POST /payroll/weekly.
///
/// Aggregates the supplied timesheets into per-staff weekly hours and gross
/// pay. Aggregation itself never fails; only malformed bodies are rejected.
async fn weekly_payroll_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let staff: Vec<StaffMember> = request.staff.into_iter().map(Into::into).collect();
    let timesheets: Vec<Timesheet> = request.timesheets.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let summary = aggregate_week(request.week, &timesheets, &staff, request.rate_policy);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        week = %summary.week.start(),
        staff_count = staff.len(),
        timesheet_count = timesheets.len(),
        total_hours = %summary.total_hours,
        total_pay = %summary.total_pay,
        duration_us = duration.as_micros(),
        "Weekly payroll aggregated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}
