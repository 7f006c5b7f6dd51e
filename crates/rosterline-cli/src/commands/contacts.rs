//! `rosterline contacts`

use rosterline_contact::{ContactChannel, contact_channels, primary_href};
use rosterline_core::employee_records;
use serde::Serialize;
use serde_json::Value;

/// Contact lines for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeContacts {
    /// Display name.
    pub employee: String,
    /// Employee identifier, when known.
    pub employee_id: Option<String>,
    /// Work, mobile and home lines.
    pub channels: Vec<ContactChannel>,
    /// First dialable link across the lines.
    pub primary_href: Option<String>,
}

/// Format contact lines for every employee in the payload.
pub fn run(payload: &Value) -> Vec<EmployeeContacts> {
    employee_records(payload)
        .iter()
        .map(|record| {
            let channels = contact_channels(record);
            EmployeeContacts {
                employee: record.display_name(),
                employee_id: record.employee_id(),
                primary_href: primary_href(&channels).map(String::from),
                channels,
            }
        })
        .collect()
}
