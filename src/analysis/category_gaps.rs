//! Per-job-category pay gaps.
//!
//! Comparing men and women within the same job category controls for role
//! differences between the genders. A category is only comparable when it
//! has at least one man and one woman; otherwise its gaps are reported as
//! not applicable (`None`), never as zero.

use std::collections::BTreeMap;

use crate::models::{CategoryGap, Employee};

use super::partition::{GenderPartition, WageMetric};

/// Computes mean gaps for every job category, sorted by category name.
///
/// Categories whose members are all of unknown gender are omitted.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::analysis::category_gaps;
///
/// assert!(category_gaps(&[]).is_empty());
/// ```
pub fn category_gaps(employees: &[Employee]) -> Vec<CategoryGap> {
    let mut by_category: BTreeMap<&str, GenderPartition<'_>> = BTreeMap::new();
    for employee in employees {
        by_category
            .entry(employee.job_category.as_str())
            .or_default()
            .push(employee);
    }

    by_category
        .into_iter()
        .filter(|(_, partition)| !partition.is_empty())
        .map(|(category, partition)| category_gap(category, &partition))
        .collect()
}

fn category_gap(category: &str, partition: &GenderPartition<'_>) -> CategoryGap {
    if !partition.is_comparable() {
        return CategoryGap::not_applicable(category);
    }

    CategoryGap {
        category: category.to_string(),
        mean_gap_base: Some(partition.mean_gap(WageMetric::BaseHourly)),
        mean_gap_total: Some(partition.mean_gap(WageMetric::TotalHourly)),
        mean_gap_variable: Some(partition.mean_gap(WageMetric::VariableHourly)),
        mean_gap_annual_total: Some(partition.mean_gap(WageMetric::GrossAnnual)),
        mean_gap_annual_variable: Some(partition.mean_gap(WageMetric::AnnualVariable)),
    }
}
