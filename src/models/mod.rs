//! Core data models for the Pay Gap Engine.
//!
//! This module contains the employee input record and the report produced
//! by the analyzer.

mod analysis_report;
mod employee;

pub use analysis_report::{AnalysisReport, CategoryGap, QuartileData};
pub use employee::{Employee, Gender};
