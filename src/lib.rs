//! Pay Gap Engine for pay transparency reporting
//!
//! This crate computes the gender pay gap metrics required by the EU Pay
//! Transparency Directive (2023/970) from a list of employees: mean and
//! median gaps on base, variable and total pay, variable pay participation,
//! the gender split of each pay quartile and per-category gaps. It also maps
//! raw payroll extracts into analyzer input and serves both over HTTP.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod models;
