//! Request types for the Pay Gap Engine API.
//!
//! This module defines the JSON request structure for the `/analyze`
//! endpoint. The `/analyze/payroll` endpoint takes a
//! [`PayrollExtract`](crate::ingestion::PayrollExtract) directly.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The employees to analyze. May be empty.
    pub employees: Vec<Employee>,
}
