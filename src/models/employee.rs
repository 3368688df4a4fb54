//! Employee model and related types.
//!
//! This module defines the [`Employee`] record consumed by the analyzer and
//! the [`Gender`] grouping key.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The gender grouping key used to partition employees.
///
/// Raw upstream values are normalized into this closed set; anything that is
/// neither male nor female lands in [`Gender::Unknown`] and is excluded from
/// every gender-based metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male employee.
    #[serde(alias = "Man")]
    Male,
    /// Female employee.
    #[serde(alias = "Vrouw")]
    Female,
    /// Gender not recorded or outside the reporting enumeration.
    #[serde(alias = "Onbekend")]
    Unknown,
}

/// A single employee with wage figures already resolved to current values.
///
/// Monetary values share one currency unit. The record is trusted by the
/// analyzer: `total_hourly_wage` must equal `base_hourly_wage +
/// variable_hourly_component`, which is enforced at the boundary by
/// [`validate_employee`](crate::ingestion::validate_employee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable identifier, unique within an input set.
    pub id: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Gender grouping key.
    pub gender: Gender,
    /// Age in whole years. Informational only.
    #[serde(default)]
    pub age: u32,
    /// Free-text job category used for the per-category breakdown.
    pub job_category: String,
    /// Base hourly wage.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub base_hourly_wage: Decimal,
    /// Variable pay (bonuses, allowances) as an hourly equivalent.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub variable_hourly_component: Decimal,
    /// Base plus variable hourly wage.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_hourly_wage: Decimal,
    /// Contracted employment fraction in (0, 1].
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub fte: Decimal,
    /// Average weekly hours times 52.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub annual_hours: Decimal,
    /// Total hourly wage times annual hours.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub gross_annual_wage: Decimal,
}

impl Employee {
    /// Returns true if the employee receives any variable pay.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_gap_engine::models::{Employee, Gender};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "E001".to_string(),
    ///     full_name: None,
    ///     gender: Gender::Female,
    ///     age: 41,
    ///     job_category: "Finance".to_string(),
    ///     base_hourly_wage: Decimal::new(2500, 2),
    ///     variable_hourly_component: Decimal::new(310, 2),
    ///     total_hourly_wage: Decimal::new(2810, 2),
    ///     fte: Decimal::ONE,
    ///     annual_hours: Decimal::from(1976),
    ///     gross_annual_wage: Decimal::new(5552560, 2),
    /// };
    /// assert!(employee.receives_variable_pay());
    /// ```
    pub fn receives_variable_pay(&self) -> bool {
        self.variable_hourly_component > Decimal::ZERO
    }

    /// Returns the variable component expressed on an annual basis.
    ///
    /// Saturates at the `Decimal` bounds instead of overflowing.
    pub fn annual_variable_wage(&self) -> Decimal {
        self.variable_hourly_component
            .saturating_mul(self.annual_hours)
    }
}
