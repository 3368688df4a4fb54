//! HTTP request handlers for the Pay Gap Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze;
use crate::ingestion::{PayrollExtract, map_payroll_extract, sanitize_employees, validate_employees};

use super::request::AnalysisRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollAnalysisResponse, RejectedRecord};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/analyze/payroll", post(analyze_payroll_handler))
        .with_state(state)
}

/// Handler for POST /analyze endpoint.
///
/// Validates the submitted employees and returns their analysis report.
/// Any invalid record rejects the whole request.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_employees(&request.employees, state.config().validation()) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Employee validation failed"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let report = analyze(&request.employees);
    info!(
        correlation_id = %correlation_id,
        total_employees = report.total_employees,
        male_count = report.male_count,
        female_count = report.female_count,
        mean_gap_total = %report.mean_gap_total,
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed successfully"
    );

    json_response(StatusCode::OK, &report)
}

/// Handler for POST /analyze/payroll endpoint.
///
/// Maps a raw payroll extract into employees, drops records that fail
/// validation, and returns the employees, the dropped records and the report.
async fn analyze_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollExtract>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll analysis request");

    let extract = match payload {
        Ok(Json(extract)) => extract,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let as_of = extract.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let start_time = Instant::now();
    let mapped = map_payroll_extract(&extract, config.ingestion(), as_of);
    let (employees, rejected) = sanitize_employees(mapped, config.validation());
    if !rejected.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            rejected = rejected.len(),
            "Payroll records excluded from analysis"
        );
    }

    let report = analyze(&employees);
    info!(
        correlation_id = %correlation_id,
        raw_employees = extract.employees.len(),
        total_employees = report.total_employees,
        mean_gap_total = %report.mean_gap_total,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll analysis completed successfully"
    );

    let body = PayrollAnalysisResponse {
        employees,
        rejected: rejected.into_iter().map(RejectedRecord::from).collect(),
        report,
    };
    json_response(StatusCode::OK, &body)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
