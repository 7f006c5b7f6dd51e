//! Boundary record types.
//!
//! Upstream JSON has no guaranteed schema, so records are kept as JSON
//! objects behind newtypes. Conversion happens once, here: arrays become
//! record lists, non-object entries are skipped, and a non-array payload is
//! treated as an empty list. Normalizers then read fields through the alias
//! helpers in [`crate::util::fields`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::fields::{self, Aliases};
use crate::{Error, Result};

/// Employee display-name aliases, checked in order.
pub const NAME_FIELDS: Aliases = &["employee_name", "employeeName", "name"];
/// Given-name aliases used when no display name is present.
pub const FIRST_NAME_FIELDS: Aliases = &["first_name", "firstName"];
/// Family-name aliases used when no display name is present.
pub const LAST_NAME_FIELDS: Aliases = &["last_name", "lastName"];
/// Employee identifier aliases, checked in order.
pub const ID_FIELDS: Aliases = &["employee_id", "employeeId", "emp_id", "id"];

/// Placeholder shown when a record carries no usable name.
pub const MISSING_NAME: &str = "—";

/// Parse JSON text fetched from the record store.
pub fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| Error::parse(format!("invalid JSON payload: {e}")))
}

/// Shared behavior of the partial-record newtypes.
pub trait PartialRecord: Sized {
    /// Wrap a JSON object.
    fn from_map(map: Map<String, Value>) -> Self;

    /// Borrow the underlying fields.
    fn fields(&self) -> &Map<String, Value>;

    /// Wrap a JSON value if it is an object.
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::from_map(map)),
            _ => None,
        }
    }

    /// Look up one field, following dotted paths.
    fn get(&self, key: &str) -> Option<&Value> {
        fields::lookup(self.fields(), key)
    }
}

/// An employee record as returned by the record store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeRecord(Map<String, Value>);

impl PartialRecord for EmployeeRecord {
    fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl EmployeeRecord {
    /// Resolve the display name.
    ///
    /// Order: an explicit name field, then first and last name joined with a
    /// single space, then [`MISSING_NAME`].
    ///
    /// # Example
    ///
    /// ```
    /// use rosterline_core::{EmployeeRecord, PartialRecord};
    /// use serde_json::json;
    ///
    /// let rec = EmployeeRecord::from_value(json!({"first_name": "Ada", "lastName": "Byron"})).unwrap();
    /// assert_eq!(rec.display_name(), "Ada Byron");
    /// ```
    pub fn display_name(&self) -> String {
        if let Some(name) = fields::first_text(&self.0, NAME_FIELDS) {
            return name;
        }

        let parts: Vec<String> = [FIRST_NAME_FIELDS, LAST_NAME_FIELDS]
            .iter()
            .filter_map(|aliases| fields::first_text(&self.0, aliases))
            .collect();
        if parts.is_empty() {
            MISSING_NAME.to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Resolve the employee identifier, if any alias is non-null.
    pub fn employee_id(&self) -> Option<String> {
        fields::first_defined(&self.0, ID_FIELDS).map(crate::util::coerce::to_text)
    }
}

/// A single timecard row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimecardRow(Map<String, Value>);

impl PartialRecord for TimecardRow {
    fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Convert a fetched payload into employee records.
///
/// A non-array payload is an empty list; non-object entries are skipped.
pub fn employee_records(payload: &Value) -> Vec<EmployeeRecord> {
    collect_records(payload)
}

/// Convert a fetched payload into timecard rows.
///
/// A single object is accepted as a one-row payload.
pub fn timecard_rows(payload: &Value) -> Vec<TimecardRow> {
    match payload {
        Value::Object(map) => vec![TimecardRow::from_map(map.clone())],
        other => collect_records(other),
    }
}

fn collect_records<R: PartialRecord>(payload: &Value) -> Vec<R> {
    let Some(items) = payload.as_array() else {
        log::debug!("record payload is not an array; treating as empty");
        return Vec::new();
    };

    let records: Vec<R> = items
        .iter()
        .filter_map(|item| R::from_value(item.clone()))
        .collect();
    if records.len() < items.len() {
        log::debug!(
            "skipped {} non-object entries in record payload",
            items.len() - records.len()
        );
    }
    records
}
