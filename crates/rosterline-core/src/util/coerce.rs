//! Loose value coercion for schema-drifting JSON.
//!
//! Upstream records put the same concept under different types from one
//! export to the next (`"220145"` vs `220145`, `""` vs `null`). These helpers
//! give every consumer the same answer to "is this populated?" and "what does
//! it read as?".

use serde_json::Value;

/// Check whether a value counts as populated.
///
/// `null`, `false`, `0`, `NaN` and `""` are empty. Everything else,
/// including empty arrays and objects, is populated.
///
/// # Examples
///
/// ```
/// use rosterline_core::util::coerce::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("J-99")));
/// assert!(is_truthy(&json!(7)));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!(null)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value the way it should read on screen.
///
/// Strings pass through untouched. Integral numbers drop any `.0`, arrays
/// join their elements with commas, and objects collapse to a fixed
/// placeholder.
///
/// # Examples
///
/// ```
/// use rosterline_core::util::coerce::to_text;
/// use serde_json::json;
///
/// assert_eq!(to_text(&json!("DeptA")), "DeptA");
/// assert_eq!(to_text(&json!(220145)), "220145");
/// assert_eq!(to_text(&json!(12.0)), "12");
/// assert_eq!(to_text(&json!(["a", 1])), "a,1");
/// ```
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // f64 Display already omits a trailing ".0"
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Interpret a value as a number of hours (or any other quantity).
///
/// Accepts JSON numbers and numeric strings; anything else is `None`.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
