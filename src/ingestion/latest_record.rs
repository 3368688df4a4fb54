//! Selection of the current record among historical ones.
//!
//! Salary and organization records are historical: an employee can have
//! several, possibly overlapping. The current one is picked with a fixed
//! tie-break order:
//!
//! 1. records without an end date (still active) first; an end date that is
//!    present but unparseable still marks the record as closed;
//! 2. then the latest start date;
//! 3. then the latest end date.
//!
//! Missing dates sort as the earliest possible value. Among full ties the
//! record that comes first in input order wins.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDateTime;

/// A historical record attached to an employee and bounded by dates.
pub trait DatedRecord {
    /// The raw upstream ID of the employee this record belongs to.
    fn employee_id(&self) -> &str;
    /// When the record takes effect.
    fn start_date(&self) -> Option<NaiveDateTime>;
    /// When the record stops applying; `None` if still active or unparseable.
    fn end_date(&self) -> Option<NaiveDateTime>;
    /// Whether the record carries any end date, parseable or not.
    fn has_end_date(&self) -> bool {
        self.end_date().is_some()
    }
}

/// Orders two records so that the more current one compares as `Less`.
pub fn compare_recency<T: DatedRecord>(a: &T, b: &T) -> Ordering {
    a.has_end_date()
        .cmp(&b.has_end_date())
        .then_with(|| b.start_date().cmp(&a.start_date()))
        .then_with(|| b.end_date().cmp(&a.end_date()))
}

/// Returns the most current record, or `None` when there are no records.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::ingestion::{select_latest, SalaryRecord};
///
/// let closed = SalaryRecord {
///     employee: "e1".to_string(),
///     start_date: Some("2024-01-01".to_string()),
///     end_date: Some("2024-06-30".to_string()),
///     ..Default::default()
/// };
/// let active = SalaryRecord {
///     employee: "e1".to_string(),
///     start_date: Some("2020-01-01".to_string()),
///     end_date: None,
///     ..Default::default()
/// };
/// let records = [closed, active];
///
/// let latest = select_latest(&records).unwrap();
/// assert!(latest.end_date.is_none());
/// ```
pub fn select_latest<'a, T, I>(records: I) -> Option<&'a T>
where
    T: DatedRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    // min_by keeps the first of several equal elements.
    records.into_iter().min_by(|a, b| compare_recency(*a, *b))
}

/// Returns the most current record of one employee.
pub fn latest_for_employee<'a, T: DatedRecord>(
    records: &'a [T],
    employee_id: &str,
) -> Option<&'a T> {
    select_latest(records.iter().filter(|r| r.employee_id() == employee_id))
}

/// Indexes the most current record of every employee by employee ID.
pub fn latest_by_employee<T: DatedRecord>(records: &[T]) -> HashMap<&str, &T> {
    let mut grouped: HashMap<&str, Vec<&T>> = HashMap::new();
    for record in records {
        grouped.entry(record.employee_id()).or_default().push(record);
    }

    grouped
        .into_iter()
        .filter_map(|(employee_id, group)| {
            select_latest(group.into_iter()).map(|latest| (employee_id, latest))
        })
        .collect()
}
