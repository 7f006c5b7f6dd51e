//! Alias-field lookup.
//!
//! Every concept in an upstream record (an employee's id, a start date, a
//! job code) can arrive under several spellings. Callers describe a concept
//! as an ordered slice of candidate keys and resolve it with one of the
//! helpers here instead of branching at every call site.
//!
//! A key containing `.` is treated as a path into nested objects, so
//! `"job.code"` finds `{"job": {"code": "J1"}}`.
//!
//! # Example
//!
//! ```
//! use rosterline_core::util::fields::{first_defined, first_text};
//! use serde_json::json;
//!
//! let record = json!({"employeeId": 0, "name": "", "job": {"code": "J1"}});
//! let map = record.as_object().unwrap();
//!
//! assert_eq!(first_defined(map, &["employee_id", "employeeId"]), Some(&json!(0)));
//! assert_eq!(first_text(map, &["name", "job.code"]), Some("J1".to_string()));
//! ```

use serde_json::{Map, Value};

use super::coerce::{is_truthy, to_text};

/// An ordered list of candidate keys for one concept.
pub type Aliases = &'static [&'static str];

/// Look up a single key, following `.`-separated paths into nested objects.
///
/// An exact key match wins over a path interpretation.
pub fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }
    if !key.contains('.') {
        return None;
    }

    let mut parts = key.split('.');
    let mut current = map.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Return the first alias whose value is present and not `null`.
///
/// Falsy-but-defined values such as `0`, `false` and `""` are returned.
pub fn first_defined<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| lookup(map, key))
        .find(|value| !value.is_null())
}

/// Return the first alias whose value is populated (see [`is_truthy`]).
pub fn first_truthy<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| lookup(map, key))
        .find(|value| is_truthy(value))
}

/// Return the first populated alias rendered as display text.
///
/// Values that render to nothing (an empty array) are passed over, so a
/// returned string is never empty.
pub fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| lookup(map, key))
        .filter(|value| is_truthy(value))
        .map(to_text)
        .find(|text| !text.is_empty())
}

/// Check whether any alias is populated.
pub fn any_truthy(map: &Map<String, Value>, keys: &[&str]) -> bool {
    first_truthy(map, keys).is_some()
}

/// Return the first alias holding a JSON array.
pub fn first_array<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter()
        .filter_map(|key| lookup(map, key))
        .find_map(Value::as_array)
}
