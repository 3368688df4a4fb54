//! Gender partitioning and variable-pay participation.
//!
//! A [`GenderPartition`] splits a set of employees into men and women and
//! computes mean and median gaps for any [`WageMetric`]. Employees of unknown
//! gender are dropped from both sides.

use rust_decimal::Decimal;

use crate::models::{Employee, Gender};

use super::statistics::{
    MONEY_DECIMAL_PLACES, SHARE_DECIMAL_PLACES, gap, mean, median, percentage, round_to,
};

/// A per-employee wage figure that gaps can be computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WageMetric {
    /// Base hourly wage.
    BaseHourly,
    /// Total (base plus variable) hourly wage.
    TotalHourly,
    /// Variable hourly component.
    VariableHourly,
    /// Gross annual wage.
    GrossAnnual,
    /// Variable component on an annual basis.
    AnnualVariable,
}

impl WageMetric {
    /// Extracts this metric from an employee.
    pub fn value(self, employee: &Employee) -> Decimal {
        match self {
            WageMetric::BaseHourly => employee.base_hourly_wage,
            WageMetric::TotalHourly => employee.total_hourly_wage,
            WageMetric::VariableHourly => employee.variable_hourly_component,
            WageMetric::GrossAnnual => employee.gross_annual_wage,
            WageMetric::AnnualVariable => employee.annual_variable_wage(),
        }
    }
}

/// Employees split into men and women.
#[derive(Debug, Clone, Default)]
pub struct GenderPartition<'a> {
    men: Vec<&'a Employee>,
    women: Vec<&'a Employee>,
}

impl<'a> GenderPartition<'a> {
    /// Partitions `employees` by gender, preserving input order within each side.
    pub fn new(employees: impl IntoIterator<Item = &'a Employee>) -> Self {
        let mut partition = Self::default();
        for employee in employees {
            partition.push(employee);
        }
        partition
    }

    /// Adds one employee to the matching side; unknown gender is ignored.
    pub fn push(&mut self, employee: &'a Employee) {
        match employee.gender {
            Gender::Male => self.men.push(employee),
            Gender::Female => self.women.push(employee),
            Gender::Unknown => {}
        }
    }

    /// The male employees.
    pub fn men(&self) -> &[&'a Employee] {
        &self.men
    }

    /// The female employees.
    pub fn women(&self) -> &[&'a Employee] {
        &self.women
    }

    /// Returns true if neither side has any employees.
    pub fn is_empty(&self) -> bool {
        self.men.is_empty() && self.women.is_empty()
    }

    /// Returns true if both sides have at least one employee.
    pub fn is_comparable(&self) -> bool {
        !self.men.is_empty() && !self.women.is_empty()
    }

    /// Gap between the male and female means of `metric`.
    pub fn mean_gap(&self, metric: WageMetric) -> Decimal {
        gap(
            mean(&values(&self.men, metric)),
            mean(&values(&self.women, metric)),
        )
    }

    /// Gap between the male and female medians of `metric`.
    pub fn median_gap(&self, metric: WageMetric) -> Decimal {
        gap(
            median(&values(&self.men, metric)),
            median(&values(&self.women, metric)),
        )
    }

    /// Rounded means of `metric` for men and women.
    pub fn means(&self, metric: WageMetric) -> (Decimal, Decimal) {
        (
            round_to(mean(&values(&self.men, metric)), MONEY_DECIMAL_PLACES),
            round_to(mean(&values(&self.women, metric)), MONEY_DECIMAL_PLACES),
        )
    }

    /// Rounded medians of `metric` for men and women.
    pub fn medians(&self, metric: WageMetric) -> (Decimal, Decimal) {
        (
            round_to(median(&values(&self.men, metric)), MONEY_DECIMAL_PLACES),
            round_to(median(&values(&self.women, metric)), MONEY_DECIMAL_PLACES),
        )
    }

    /// Percentage of men and of women receiving any variable pay.
    pub fn variable_pay_participation(&self) -> (Decimal, Decimal) {
        (
            variable_pay_participation(&self.men),
            variable_pay_participation(&self.women),
        )
    }
}

/// Percentage of `group` with a non-zero variable component, one decimal place.
///
/// An empty group has a participation of zero.
pub fn variable_pay_participation(group: &[&Employee]) -> Decimal {
    let receiving = group.iter().filter(|e| e.receives_variable_pay()).count();
    percentage(receiving, group.len(), SHARE_DECIMAL_PLACES)
}

fn values(group: &[&Employee], metric: WageMetric) -> Vec<Decimal> {
    group.iter().map(|e| metric.value(e)).collect()
}
