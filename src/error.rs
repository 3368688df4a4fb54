//! Error types for the Pay Gap Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur outside the analyzer itself:
//! configuration loading and validation of employee records at the boundary.
//! The analyzer has no error path.

use thiserror::Error;

/// The main error type for the Pay Gap Engine.
///
/// # Example
///
/// ```
/// use pay_gap_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The ID of the offending employee record.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Two records in the same input set share an employee ID.
    #[error("Duplicate employee id: {employee_id}")]
    DuplicateEmployee {
        /// The repeated employee ID.
        employee_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
