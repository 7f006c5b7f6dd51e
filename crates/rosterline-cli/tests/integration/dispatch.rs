//! End-to-end command dispatch against payload files.

use crate::common::{TestHarness, args, employee_export};
use rosterline_cli::commands::dispatch;
use rosterline_cli::config::RosterlineConfig;
use serde_json::{Value, json};

fn compact() -> RosterlineConfig {
    let mut config = RosterlineConfig::default();
    config.output.pretty = false;
    config
}

#[tokio::test]
async fn test_assignments_from_file() {
    let harness = TestHarness::new();
    let input = harness.payload("employees.json", &employee_export());

    let out = dispatch(&args(&["assignments", "--input", &input]), &compact())
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(
        value,
        json!([
            {
                "employee": "Ada Byron",
                "employeeId": "7",
                "start": "2024-03-01T00:00:00Z",
                "end": "2024-03-31T00:00:00Z",
                "project": "Bridge"
            },
            {
                "employee": "Grace Hopper",
                "employeeId": "E-2",
                "start": "2024-02-01T00:00:00Z",
                "end": "2024-02-28T00:00:00Z",
                "project": "Tunnel"
            }
        ])
    );
}

#[tokio::test]
async fn test_config_sort_applies_without_flag() {
    let harness = TestHarness::new();
    let input = harness.payload("employees.json", &employee_export());
    let mut config = compact();
    config.timeline.sort_by_start = true;

    let out = dispatch(&args(&["assignments", "-i", &input]), &config)
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["project"], "Tunnel");
    assert_eq!(value[1]["project"], "Bridge");
}

#[tokio::test]
async fn test_project_keys_summary_from_file() {
    let harness = TestHarness::new();
    let input = harness.payload(
        "timecards.json",
        &json!([
            {"allocation_code": "J-99", "hours": 6},
            {"homeDept": "D", "homeJobCode": "J", "hours": 2},
            {"allocation_code": "J-99", "hours": 2}
        ]),
    );

    let out = dispatch(
        &args(&["project-keys", "--input", &input, "--summary"]),
        &compact(),
    )
    .await
    .unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        json!([
            {"project": "J-99", "hours": 8.0, "rows": 2},
            {"project": "D / J", "hours": 2.0, "rows": 1}
        ])
    );
}

#[tokio::test]
async fn test_contacts_from_file() {
    let harness = TestHarness::new();
    let input = harness.payload("employees.json", &employee_export());

    let out = dispatch(&args(&["contacts", "--input", &input]), &compact())
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["primaryHref"], "tel:+15551234567,12");
    assert_eq!(value[1]["channels"][1]["text"], "(555) 987-6543");
}

#[tokio::test]
async fn test_phone_pretty_output() {
    let out = dispatch(&args(&["phone", "555-123-4567"]), &RosterlineConfig::default())
        .await
        .unwrap();
    assert!(out.starts_with("[\n"));
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["href"], "tel:+15551234567");
}

#[tokio::test]
async fn test_missing_input_file_is_an_error() {
    let err = dispatch(
        &args(&["assignments", "--input", "/nonexistent/employees.json"]),
        &compact(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/employees.json"));
}

#[tokio::test]
async fn test_invalid_json_is_an_error() {
    let harness = TestHarness::new();
    let path = harness.write("broken.json", "[{\"name\": ");

    let err = dispatch(
        &args(&["project-keys", "--input", path.to_str().unwrap()]),
        &compact(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("invalid JSON payload"));
}
