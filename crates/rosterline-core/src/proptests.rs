//! Property-based tests for coercion and date parsing.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::util::coerce::{is_truthy, to_text};
    use crate::util::dates::{parse_loose, parse_str};
    use chrono::{Datelike, NaiveDate};
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn test_parse_str_never_panics(s in "\\PC*") {
            let _ = parse_str(&s);
        }

        #[test]
        fn test_iso_dates_parse_to_same_day(days in 0i64..100_000) {
            let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
            let text = date.format("%Y-%m-%d").to_string();
            let parsed = parse_loose(&json!(text)).unwrap();
            prop_assert_eq!(parsed.date_naive(), date);
            prop_assert_eq!(parsed.year(), date.year());
        }

        #[test]
        fn test_non_empty_strings_are_truthy(s in "\\PC+") {
            let value = json!(s.clone());
            prop_assert!(is_truthy(&value));
            prop_assert_eq!(to_text(&value), s);
        }

        #[test]
        fn test_integers_render_without_decimal(n in any::<i64>()) {
            prop_assert_eq!(to_text(&json!(n)), n.to_string());
        }
    }
}
