//! Numeric primitives shared by every report metric.
//!
//! All functions are total: empty inputs and zero denominators resolve to a
//! defined zero instead of an error, so downstream formulas never see an
//! undefined value. Intermediate results that leave the `Decimal` range
//! saturate instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on pay gap percentages.
pub const GAP_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept on headcount shares (participation, quartiles).
pub const SHARE_DECIMAL_PLACES: u32 = 1;

/// Decimal places kept on monetary group statistics.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds `value` to `dp` decimal places, with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::analysis::round_to;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to(Decimal::new(12345, 3), 2), Decimal::new(1235, 2));
/// assert_eq!(round_to(Decimal::new(-12345, 3), 2), Decimal::new(-1235, 2));
/// ```
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the arithmetic mean of `values`, or zero when there are none.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::analysis::mean;
/// use rust_decimal::Decimal;
///
/// let values = [Decimal::from(10), Decimal::from(20), Decimal::from(45)];
/// assert_eq!(mean(&values), Decimal::from(25));
/// assert_eq!(mean(&[]), Decimal::ZERO);
/// ```
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let count = Decimal::from(values.len());
    match values
        .iter()
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(*value))
    {
        Some(sum) => sum / count,
        // Scale down first when the plain sum does not fit.
        None => values
            .iter()
            .fold(Decimal::ZERO, |sum, value| sum.saturating_add(*value / count)),
    }
}

/// Returns the median of `values`, or zero when there are none.
///
/// For an even number of values the two middle elements are averaged.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::analysis::median;
/// use rust_decimal::Decimal;
///
/// let values = [4, 1, 3, 2].map(Decimal::from);
/// assert_eq!(median(&values), Decimal::new(25, 1));
/// ```
pub fn median(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let mut sorted = values.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        let (low, high) = (sorted[mid - 1], sorted[mid]);
        match low.checked_add(high) {
            Some(sum) => sum / Decimal::TWO,
            None => low / Decimal::TWO + high / Decimal::TWO,
        }
    }
}

/// Computes the pay gap between a male and a female statistic.
///
/// The gap is `(men - women) / men * 100`, rounded to two decimal places.
/// It is relative to the male figure, so it is not symmetric: a 100 vs 80
/// split is a 20% gap while 80 vs 100 is -25%.
///
/// When `men` is zero the gap is defined as exactly zero. Report consumers
/// rely on this value, so it must not be replaced by infinity or an error.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::analysis::gap;
/// use rust_decimal::Decimal;
///
/// assert_eq!(gap(Decimal::from(100), Decimal::from(80)), Decimal::from(20));
/// assert_eq!(gap(Decimal::from(80), Decimal::from(100)), Decimal::from(-25));
/// assert_eq!(gap(Decimal::ZERO, Decimal::from(80)), Decimal::ZERO);
/// ```
pub fn gap(men: Decimal, women: Decimal) -> Decimal {
    if men.is_zero() {
        return Decimal::ZERO;
    }
    let relative = men
        .checked_sub(women)
        .and_then(|difference| difference.checked_div(men))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
    match relative {
        Some(value) => round_to(value, GAP_DECIMAL_PLACES),
        None if (men > women) == (men > Decimal::ZERO) => Decimal::MAX,
        None => Decimal::MIN,
    }
}

/// Returns `part / whole * 100` rounded to `dp` places, or zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize, dp: u32) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    round_to(
        Decimal::from(part) / Decimal::from(whole) * Decimal::ONE_HUNDRED,
        dp,
    )
}
