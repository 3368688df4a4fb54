//! Ingestion of payroll data for the Pay Gap Engine.
//!
//! This module turns raw payroll extracts into analyzer input: it parses
//! upstream dates, picks the current record among historical salary and
//! organization records, maps employees with their wages and job category,
//! and validates employee records at the boundary.

mod dates;
mod latest_record;
mod mapping;
mod payroll;
mod validation;

pub use dates::{age_on, parse_optional_date, parse_record_date};
pub use latest_record::{
    DatedRecord, compare_recency, latest_by_employee, latest_for_employee, select_latest,
};
pub use mapping::{
    WEEKS_PER_YEAR, map_employee, map_payroll_extract, normalize_gender, resolve_job_category,
};
pub use payroll::{JobTitle, OrganizationRecord, PayrollExtract, RawEmployee, SalaryRecord};
pub use validation::{sanitize_employees, validate_employee, validate_employees};
