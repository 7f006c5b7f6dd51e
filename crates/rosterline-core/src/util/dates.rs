//! Loose calendar parsing.
//!
//! Upstream exports carry dates as ISO strings, US-style strings, long-form
//! month names, or epoch milliseconds. [`parse_loose`] accepts all of them
//! and answers `None` for anything it cannot place on the calendar; an
//! unparsable date is treated as absent, never as an error.
//!
//! Values without an explicit offset are interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::coerce::is_truthy;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Parse a JSON value into a UTC instant.
///
/// Numbers are epoch milliseconds. Strings are tried against RFC 3339,
/// offset-less ISO date-times, and a set of common date-only layouts.
/// Empty values, booleans, arrays and objects yield `None`.
///
/// # Examples
///
/// ```
/// use rosterline_core::util::dates::parse_loose;
/// use serde_json::json;
///
/// let start = parse_loose(&json!("2024-01-01")).unwrap();
/// assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
///
/// let same = parse_loose(&json!(1704067200000_i64)).unwrap();
/// assert_eq!(start, same);
///
/// assert!(parse_loose(&json!("not a date")).is_none());
/// assert!(parse_loose(&json!("2024-02-30")).is_none());
/// ```
pub fn parse_loose(value: &Value) -> Option<DateTime<Utc>> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::Number(n) => {
            let millis = n.as_f64()?;
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        Value::String(s) => parse_str(s),
        _ => None,
    }
}

/// Parse a date string; see [`parse_loose`].
pub fn parse_str(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.and_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
