//! Response types for the Pay Gap Engine API.
//!
//! This module defines the success payloads that wrap an analysis report and
//! the error response structures for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AnalysisReport, Employee};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidEmployee {
                employee_id,
                field,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!(
                        "Invalid employee '{}' field '{}': {}",
                        employee_id, field, message
                    ),
                    "The employee data contains invalid information",
                ),
            },
            EngineError::DuplicateEmployee { employee_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DUPLICATE_EMPLOYEE",
                    format!("Duplicate employee id: {}", employee_id),
                    "Employee ids must be unique within a request",
                ),
            },
        }
    }
}

/// A record dropped while preparing payroll data for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRecord {
    /// The ID of the dropped employee.
    pub employee_id: String,
    /// Why the record was dropped.
    pub reason: String,
}

impl From<EngineError> for RejectedRecord {
    fn from(error: EngineError) -> Self {
        let employee_id = match &error {
            EngineError::InvalidEmployee { employee_id, .. }
            | EngineError::DuplicateEmployee { employee_id } => employee_id.clone(),
            _ => String::new(),
        };
        Self {
            employee_id,
            reason: error.to_string(),
        }
    }
}

/// Response body for the `/analyze/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollAnalysisResponse {
    /// The employees the report was computed from.
    pub employees: Vec<Employee>,
    /// Records excluded from the analysis.
    pub rejected: Vec<RejectedRecord>,
    /// The analysis report.
    pub report: AnalysisReport,
}
