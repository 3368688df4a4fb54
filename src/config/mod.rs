//! Configuration loading and management for the Pay Gap Engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML: defaults used when mapping payroll records and tolerances used when
//! validating employee records.
//!
//! # Example
//!
//! ```no_run
//! use pay_gap_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Monthly hours: {}", config.ingestion().monthly_hours_divisor);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    DEFAULT_WEEKLY_HOURS, EngineConfig, IngestionSettings, ValidationSettings,
    default_monthly_hours_divisor,
};
