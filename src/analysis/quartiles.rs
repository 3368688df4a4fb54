//! Wage quartile distribution.
//!
//! Employees are ordered by total hourly wage and cut into four contiguous,
//! equally sized (by position) chunks. The chunking is purely positional:
//! employees with equal wages can land in different quartiles depending on
//! their input order.

use crate::models::{Employee, Gender, QuartileData};

use super::statistics::{SHARE_DECIMAL_PLACES, percentage};

/// The number of quartiles in every report.
pub const QUARTILE_COUNT: usize = 4;

/// Computes the gender distribution of each total-hourly-wage quartile.
///
/// Always returns exactly [`QUARTILE_COUNT`] entries, lowest paid first. Each
/// chunk holds `ceil(n / 4)` employees except possibly the trailing ones,
/// which may be smaller or empty. Percentages are shares of the chunk size
/// and are zero for an empty chunk.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::analysis::quartile_distribution;
///
/// let quartiles = quartile_distribution(&[]);
/// assert_eq!(quartiles.len(), 4);
/// assert!(quartiles.iter().all(|q| q.male_count == 0 && q.female_count == 0));
/// ```
pub fn quartile_distribution(employees: &[Employee]) -> Vec<QuartileData> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    // Stable: equal wages keep their input order.
    sorted.sort_by(|a, b| a.total_hourly_wage.cmp(&b.total_hourly_wage));

    let chunk_size = sorted.len().div_ceil(QUARTILE_COUNT);

    (0..QUARTILE_COUNT)
        .map(|index| {
            let start = (index * chunk_size).min(sorted.len());
            let end = (start + chunk_size).min(sorted.len());
            summarize_chunk(index + 1, &sorted[start..end])
        })
        .collect()
}

fn summarize_chunk(number: usize, chunk: &[&Employee]) -> QuartileData {
    let male_count = chunk.iter().filter(|e| e.gender == Gender::Male).count();
    let female_count = chunk.iter().filter(|e| e.gender == Gender::Female).count();

    QuartileData {
        male_percentage: percentage(male_count, chunk.len(), SHARE_DECIMAL_PLACES),
        female_percentage: percentage(female_count, chunk.len(), SHARE_DECIMAL_PLACES),
        male_count,
        female_count,
        ..QuartileData::empty(number)
    }
}
