//! The wage gap analyzer.
//!
//! [`analyze`] turns a flat list of employees into an [`AnalysisReport`]. It is
//! a pure function: no I/O, no randomness, no shared state, and it never
//! fails. Concurrent callers need no coordination.

use crate::models::{AnalysisReport, Employee};

use super::category_gaps::category_gaps;
use super::partition::{GenderPartition, WageMetric};
use super::quartiles::quartile_distribution;

/// Computes the pay transparency report for `employees`.
///
/// Employees of unknown gender count towards `total_employees` and occupy
/// quartile positions, but are excluded from every gender-based figure.
/// An empty input produces a fully populated zero report.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::analysis::analyze;
/// use rust_decimal::Decimal;
///
/// let report = analyze(&[]);
/// assert_eq!(report.total_employees, 0);
/// assert_eq!(report.mean_gap_total, Decimal::ZERO);
/// assert_eq!(report.quartiles.len(), 4);
/// assert!(report.category_gaps.is_empty());
/// ```
pub fn analyze(employees: &[Employee]) -> AnalysisReport {
    let partition = GenderPartition::new(employees);

    let (mean_hourly_wage_men, mean_hourly_wage_women) = partition.means(WageMetric::TotalHourly);
    let (median_hourly_wage_men, median_hourly_wage_women) =
        partition.medians(WageMetric::TotalHourly);
    let (mean_annual_wage_men, mean_annual_wage_women) = partition.means(WageMetric::GrossAnnual);
    let (median_annual_wage_men, median_annual_wage_women) =
        partition.medians(WageMetric::GrossAnnual);
    let (mean_variable_men, mean_variable_women) = partition.means(WageMetric::VariableHourly);
    let (mean_annual_variable_men, mean_annual_variable_women) =
        partition.means(WageMetric::AnnualVariable);
    let (percent_receiving_variable_male, percent_receiving_variable_female) =
        partition.variable_pay_participation();

    AnalysisReport {
        total_employees: employees.len(),
        male_count: partition.men().len(),
        female_count: partition.women().len(),

        mean_gap_base: partition.mean_gap(WageMetric::BaseHourly),
        mean_gap_total: partition.mean_gap(WageMetric::TotalHourly),
        mean_gap_annual_total: partition.mean_gap(WageMetric::GrossAnnual),
        mean_hourly_wage_men,
        mean_hourly_wage_women,
        mean_annual_wage_men,
        mean_annual_wage_women,

        mean_gap_variable: partition.mean_gap(WageMetric::VariableHourly),
        mean_gap_annual_variable: partition.mean_gap(WageMetric::AnnualVariable),
        mean_variable_men,
        mean_variable_women,
        mean_annual_variable_men,
        mean_annual_variable_women,

        median_gap_base: partition.median_gap(WageMetric::BaseHourly),
        median_gap_total: partition.median_gap(WageMetric::TotalHourly),
        median_gap_annual_total: partition.median_gap(WageMetric::GrossAnnual),
        median_hourly_wage_men,
        median_hourly_wage_women,
        median_annual_wage_men,
        median_annual_wage_women,

        median_gap_variable: partition.median_gap(WageMetric::VariableHourly),
        median_gap_annual_variable: partition.median_gap(WageMetric::AnnualVariable),

        percent_receiving_variable_male,
        percent_receiving_variable_female,

        quartiles: quartile_distribution(employees),
        category_gaps: category_gaps(employees),
    }
}
