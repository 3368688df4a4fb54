//! Analysis report models for the Pay Gap Engine.
//!
//! This module contains the [`AnalysisReport`] type and its associated
//! structures. The report is consumed read-only by presentation layers, so the
//! JSON shape is stable: field names are camelCase, every numeric field is a
//! JSON number, there are always exactly four quartiles, and not-applicable
//! category gaps are explicit `null`s.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gender distribution within one wage quartile.
///
/// # Example
///
/// ```
/// use pay_gap_engine::models::QuartileData;
/// use rust_decimal::Decimal;
///
/// let quartile = QuartileData::empty(1);
/// assert_eq!(quartile.quartile, "Q1");
/// assert_eq!(quartile.male_percentage, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuartileData {
    /// Quartile label, `Q1` (lowest paid) to `Q4` (highest paid).
    pub quartile: String,
    /// Number of men in the quartile.
    pub male_count: usize,
    /// Number of women in the quartile.
    pub female_count: usize,
    /// Share of men in the quartile, in percent.
    #[serde(with = "rust_decimal::serde::float")]
    pub male_percentage: Decimal,
    /// Share of women in the quartile, in percent.
    #[serde(with = "rust_decimal::serde::float")]
    pub female_percentage: Decimal,
}

impl QuartileData {
    /// Creates a zero-filled entry for the 1-based quartile `number`.
    pub fn empty(number: usize) -> Self {
        Self {
            quartile: format!("Q{}", number),
            male_count: 0,
            female_count: 0,
            male_percentage: Decimal::ZERO,
            female_percentage: Decimal::ZERO,
        }
    }
}

/// Mean pay gaps within a single job category.
///
/// `None` means the category is not comparable (it has members of one gender
/// only), which is distinct from a measured gap of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGap {
    /// The job category name.
    pub category: String,
    /// Mean gap on base hourly wage.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub mean_gap_base: Option<Decimal>,
    /// Mean gap on total hourly wage.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub mean_gap_total: Option<Decimal>,
    /// Mean gap on the variable hourly component.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub mean_gap_variable: Option<Decimal>,
    /// Mean gap on gross annual wage.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub mean_gap_annual_total: Option<Decimal>,
    /// Mean gap on annual variable pay.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub mean_gap_annual_variable: Option<Decimal>,
}

impl CategoryGap {
    /// Creates an entry for a category that cannot be compared across genders.
    pub fn not_applicable(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            mean_gap_base: None,
            mean_gap_total: None,
            mean_gap_variable: None,
            mean_gap_annual_total: None,
            mean_gap_annual_variable: None,
        }
    }

    /// Returns true if the gap fields carry measured values.
    pub fn is_comparable(&self) -> bool {
        self.mean_gap_total.is_some()
    }
}

/// The pay transparency report for one set of employees.
///
/// Gap fields are signed percentages relative to the male statistic; see
/// [`gap`](crate::analysis::gap). Letters in the field docs refer to the
/// directive's reporting items (a) to (g).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Number of employees in the input, including unknown gender.
    pub total_employees: usize,
    /// Number of male employees.
    pub male_count: usize,
    /// Number of female employees.
    pub female_count: usize,

    /// (a) Mean gap on base hourly wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_gap_base: Decimal,
    /// (a) Mean gap on total hourly wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_gap_total: Decimal,
    /// (a) Mean gap on gross annual wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_gap_annual_total: Decimal,
    /// Mean total hourly wage of men.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_hourly_wage_men: Decimal,
    /// Mean total hourly wage of women.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_hourly_wage_women: Decimal,
    /// Mean gross annual wage of men.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_annual_wage_men: Decimal,
    /// Mean gross annual wage of women.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_annual_wage_women: Decimal,

    /// (b) Mean gap on the variable hourly component.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_gap_variable: Decimal,
    /// (b) Mean gap on annual variable pay.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_gap_annual_variable: Decimal,
    /// Mean variable hourly component of men.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_variable_men: Decimal,
    /// Mean variable hourly component of women.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_variable_women: Decimal,
    /// Mean annual variable pay of men.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_annual_variable_men: Decimal,
    /// Mean annual variable pay of women.
    #[serde(with = "rust_decimal::serde::float")]
    pub mean_annual_variable_women: Decimal,

    /// (c) Median gap on base hourly wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_gap_base: Decimal,
    /// (c) Median gap on total hourly wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_gap_total: Decimal,
    /// (c) Median gap on gross annual wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_gap_annual_total: Decimal,
    /// Median total hourly wage of men.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_hourly_wage_men: Decimal,
    /// Median total hourly wage of women.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_hourly_wage_women: Decimal,
    /// Median gross annual wage of men.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_annual_wage_men: Decimal,
    /// Median gross annual wage of women.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_annual_wage_women: Decimal,

    /// (d) Median gap on the variable hourly component.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_gap_variable: Decimal,
    /// (d) Median gap on annual variable pay.
    #[serde(with = "rust_decimal::serde::float")]
    pub median_gap_annual_variable: Decimal,

    /// (e) Percentage of men receiving variable pay.
    #[serde(with = "rust_decimal::serde::float")]
    pub percent_receiving_variable_male: Decimal,
    /// (e) Percentage of women receiving variable pay.
    #[serde(with = "rust_decimal::serde::float")]
    pub percent_receiving_variable_female: Decimal,

    /// (f) Gender distribution per total-hourly-wage quartile, always four entries.
    pub quartiles: Vec<QuartileData>,

    /// (g) Mean gaps per job category, sorted by category name.
    pub category_gaps: Vec<CategoryGap>,
}
