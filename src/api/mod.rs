//! HTTP API module for the Pay Gap Engine.
//!
//! This module provides the REST API endpoints for computing pay gap
//! reports, either from prepared employee records or from a raw payroll
//! extract.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalysisRequest;
pub use response::{ApiError, ApiErrorResponse, PayrollAnalysisResponse, RejectedRecord};
pub use state::AppState;
