//! Pay gap analysis for the Pay Gap Engine.
//!
//! This module contains the statistical routines that turn a list of
//! employees into the pay transparency metrics: mean and median gaps on base,
//! variable and total pay, variable pay participation, wage quartiles and the
//! per-category breakdown.

mod analyzer;
mod category_gaps;
mod partition;
mod quartiles;
mod statistics;

pub use analyzer::analyze;
pub use category_gaps::category_gaps;
pub use partition::{GenderPartition, WageMetric, variable_pay_participation};
pub use quartiles::{QUARTILE_COUNT, quartile_distribution};
pub use statistics::{
    GAP_DECIMAL_PLACES, MONEY_DECIMAL_PLACES, SHARE_DECIMAL_PLACES, gap, mean, median, percentage,
    round_to,
};
