//! Configuration types for ingestion and validation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`. Every field has a default so a
//! partial file only overrides what it names.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default weekly hours when a salary record carries none.
pub const DEFAULT_WEEKLY_HOURS: u32 = 38;

/// Monthly hours used to turn a monthly salary into an hourly wage.
pub fn default_monthly_hours_divisor() -> Decimal {
    Decimal::new(17333, 2)
}

/// Settings used when mapping raw payroll records into employees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IngestionSettings {
    /// Weekly hours assumed when the salary record has none.
    pub default_weekly_hours: Decimal,
    /// Divisor applied to monthly amounts when no hourly wage is recorded.
    pub monthly_hours_divisor: Decimal,
    /// FTE assumed when the salary record has no part-time factor.
    pub default_fte: Decimal,
    /// Age reported when the birth date is missing.
    pub default_age: u32,
    /// Job category used when no job title or group can be resolved.
    pub fallback_category: String,
    /// Display name used when the record has no name or code.
    pub fallback_name: String,
}

impl Default for IngestionSettings {
    fn default() -> Self {
        Self {
            default_weekly_hours: Decimal::from(DEFAULT_WEEKLY_HOURS),
            monthly_hours_divisor: default_monthly_hours_divisor(),
            default_fte: Decimal::ONE,
            default_age: 30,
            fallback_category: "Other".to_string(),
            fallback_name: "Employee".to_string(),
        }
    }
}

/// Settings for boundary validation of employee records.
///
/// The upper bounds keep sums and products over any realistic headcount well
/// inside the `Decimal` range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Largest accepted difference between the total wage and base plus variable.
    pub total_wage_tolerance: Decimal,
    /// Largest accepted base, variable or total hourly wage.
    pub max_hourly_wage: Decimal,
    /// Largest accepted annual hours (a leap year of round-the-clock work).
    pub max_annual_hours: Decimal,
    /// Largest accepted gross annual wage.
    pub max_gross_annual_wage: Decimal,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            total_wage_tolerance: Decimal::new(1, 2),
            max_hourly_wage: Decimal::from(100_000),
            max_annual_hours: Decimal::from(8_784),
            max_gross_annual_wage: Decimal::from(1_000_000_000),
        }
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Payroll mapping settings.
    pub ingestion: IngestionSettings,
    /// Employee validation settings.
    pub validation: ValidationSettings,
}
