//! Tests for the contacts command.

use rosterline_cli::commands::contacts::run;
use rosterline_contact::ChannelKind;
use serde_json::json;

#[test]
fn test_contacts_per_employee() {
    let out = run(&json!([
        {"name": "Ada", "id": 1, "work_phone": "front desk", "mobile_phone": "555-123-4567"},
        {"name": "Grace"}
    ]));
    assert_eq!(out.len(), 2);

    assert_eq!(out[0].employee, "Ada");
    assert_eq!(out[0].employee_id.as_deref(), Some("1"));
    assert_eq!(out[0].channels[0].kind, ChannelKind::Work);
    assert_eq!(out[0].channels[0].phone.text, "front desk");
    assert_eq!(out[0].primary_href.as_deref(), Some("tel:+15551234567"));

    assert_eq!(out[1].primary_href, None);
    assert_eq!(out[1].channels.len(), 3);
}

#[test]
fn test_contacts_serialization_shape() {
    let out = run(&json!([{"name": "Ada", "home_phone": "555-222-3333"}]));
    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value[0]["primaryHref"], "tel:+15552223333");
    assert_eq!(value[0]["channels"][2]["kind"], "home");
    assert_eq!(value[0]["channels"][2]["text"], "(555) 222-3333");
}
