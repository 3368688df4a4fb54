//! Date parsing for raw payroll records.
//!
//! Upstream payroll APIs encode dates either as `/Date(<epoch-ms>)/` strings
//! or as ISO 8601 text. Unparseable values are treated as missing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const WIRE_DATE_PREFIX: &str = "/Date(";
const WIRE_DATE_SUFFIX: &str = ")/";

/// Parses a raw record date into a UTC timestamp.
///
/// Accepted forms: `/Date(1704067200000)/` (optionally with a trailing
/// `+hhmm` offset, which is ignored), RFC 3339, `YYYY-MM-DDTHH:MM:SS[.f]`
/// and `YYYY-MM-DD`. Returns `None` for empty or unrecognized input.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::ingestion::parse_record_date;
/// use chrono::NaiveDate;
///
/// let wire = parse_record_date("/Date(1704067200000)/").unwrap();
/// assert_eq!(wire.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
///
/// let iso = parse_record_date("2024-01-01").unwrap();
/// assert_eq!(wire, iso);
///
/// assert!(parse_record_date("").is_none());
/// ```
pub fn parse_record_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(inner) = raw
        .strip_prefix(WIRE_DATE_PREFIX)
        .and_then(|rest| rest.strip_suffix(WIRE_DATE_SUFFIX))
    {
        return parse_epoch_millis(inner);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_utc());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parses an optional raw date, treating `None` like an empty string.
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDateTime> {
    raw.and_then(parse_record_date)
}

fn parse_epoch_millis(inner: &str) -> Option<NaiveDateTime> {
    // Skip a leading sign before looking for an offset suffix.
    let offset_start = inner
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map(|(index, _)| index)
        .unwrap_or(inner.len());

    let millis: i64 = inner[..offset_start].parse().ok()?;
    DateTime::from_timestamp_millis(millis).map(|timestamp| timestamp.naive_utc())
}

/// Returns the age in whole years on `as_of` for someone born on `birth_date`.
///
/// Returns zero for birth dates after `as_of`.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    if birth_date > as_of {
        return 0;
    }
    let mut years = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_wire_date() {
        let parsed = parse_record_date("/Date(1704067200000)/").unwrap();
        assert_eq!(parsed, date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_wire_date_with_offset() {
        let parsed = parse_record_date("/Date(1704067200000+0100)/").unwrap();
        assert_eq!(parsed.date(), date(2024, 1, 1));
    }

    #[test]
    fn test_parse_negative_wire_date() {
        // One day before the epoch.
        let parsed = parse_record_date("/Date(-86400000)/").unwrap();
        assert_eq!(parsed.date(), date(1969, 12, 31));
    }

    #[test]
    fn test_parse_iso_forms() {
        let expected = date(2023, 6, 15).and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(parse_record_date("2023-06-15T08:30:00"), Some(expected));
        assert_eq!(parse_record_date("2023-06-15T08:30:00Z"), Some(expected));
        assert_eq!(parse_record_date("2023-06-15T08:30:00.000"), Some(expected));
        assert_eq!(
            parse_record_date("2023-06-15"),
            date(2023, 6, 15).and_hms_opt(0, 0, 0)
        );
    }

    #[test]
    fn test_parse_invalid_is_none() {
        assert_eq!(parse_record_date("   "), None);
        assert_eq!(parse_record_date("yesterday"), None);
        assert_eq!(parse_record_date("/Date(abc)/"), None);
        assert_eq!(parse_optional_date(None), None);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(1990, 6, 15);
        assert_eq!(age_on(birth, date(2024, 6, 14)), 33);
        assert_eq!(age_on(birth, date(2024, 6, 15)), 34);
        assert_eq!(age_on(birth, date(2024, 12, 1)), 34);
    }

    #[test]
    fn test_age_future_birth_date_is_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }
}
