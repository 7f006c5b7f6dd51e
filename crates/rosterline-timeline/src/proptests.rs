//! Property-based tests for assignment extraction.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::extract::extract_from_value;
    use crate::timeline::{group_by_employee, sort_by_start};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn loose_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            Just(json!("")),
            Just(json!(0)),
            Just(json!("2024-01-01")),
            Just(json!("01/15/2024")),
            Just(json!("garbage")),
            any::<i64>().prop_map(|n| json!(n)),
            "[A-Z]{1,4}-?[0-9]{0,4}".prop_map(|s| json!(s)),
        ]
    }

    fn employee_value() -> impl Strategy<Value = Value> {
        (
            loose_value(),
            loose_value(),
            loose_value(),
            prop::collection::vec((loose_value(), loose_value(), loose_value()), 0..4),
        )
            .prop_map(|(project, start, end, history)| {
                let history: Vec<Value> = history
                    .into_iter()
                    .map(|(p, s, e)| json!({"project": p, "from": s, "to": e}))
                    .collect();
                json!({
                    "name": "Someone",
                    "project": project,
                    "start": start,
                    "end": end,
                    "transfers": history,
                })
            })
    }

    proptest! {
        #[test]
        fn test_extracted_projects_are_never_empty(
            records in prop::collection::vec(employee_value(), 0..6)
        ) {
            let out = extract_from_value(&Value::Array(records));
            for assignment in &out {
                prop_assert!(!assignment.project.is_empty());
            }
        }

        #[test]
        fn test_output_bounded_by_input(
            records in prop::collection::vec(employee_value(), 0..6)
        ) {
            let max: usize = records
                .iter()
                .map(|r| 1 + r["transfers"].as_array().map(Vec::len).unwrap_or(0))
                .sum();
            let out = extract_from_value(&Value::Array(records));
            prop_assert!(out.len() <= max);
        }

        #[test]
        fn test_sort_and_group_preserve_count(
            records in prop::collection::vec(employee_value(), 0..6)
        ) {
            let out = extract_from_value(&Value::Array(records));
            let count = out.len();
            let lanes = group_by_employee(&out);
            prop_assert_eq!(lanes.iter().map(|l| l.assignments.len()).sum::<usize>(), count);
            let sorted = sort_by_start(out);
            prop_assert_eq!(sorted.len(), count);
            prop_assert!(sorted.windows(2).all(|w| w[0].start <= w[1].start));
        }
    }
}
