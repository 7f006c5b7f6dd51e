//! Assignment extraction.
//!
//! Turns employee records into a flat list of [`AssignmentRecord`]s for the
//! timeline view. A record can contribute an inline assignment (project and
//! dates directly on the record), one assignment per entry of a nested
//! history array, or both. Nothing here fails: entries without a usable
//! project or dates are skipped.
//!
//! # Example
//!
//! ```
//! use rosterline_timeline::extract_from_value;
//! use serde_json::json;
//!
//! let payload = json!([{
//!     "name": "Ada Byron",
//!     "project": "X",
//!     "start": "2024-01-01",
//!     "transfers": [
//!         {"from": "2024-02-01", "to": "2024-03-01", "job_code": "J-7"},
//!         {"from": "2024-03-01", "to": "2024-04-01"},
//!     ],
//! }]);
//!
//! let out = extract_from_value(&payload);
//! assert_eq!(out.len(), 2);
//! assert_eq!(out[0].project, "X");
//! assert_eq!(out[0].start, out[0].end);
//! assert_eq!(out[1].project, "J-7");
//! ```

use chrono::{DateTime, Utc};
use rosterline_core::util::fields::{self, Aliases};
use rosterline_core::{EmployeeRecord, PartialRecord, parse_loose, to_text};
use serde_json::{Map, Value};

use crate::types::AssignmentRecord;

/// Inline project field.
pub const PROJECT_FIELD: &str = "project";
/// Inline start-date aliases.
pub const START_FIELDS: Aliases = &["start_date", "startDate", "start"];
/// Inline end-date aliases.
pub const END_FIELDS: Aliases = &["end_date", "endDate", "end"];

/// History array aliases.
pub const HISTORY_FIELDS: Aliases = &["transfers", "history", "assignments", "project_history"];
/// History entry start-date aliases.
pub const HISTORY_START_FIELDS: Aliases = &["start_date", "startDate", "start", "from"];
/// History entry end-date aliases.
pub const HISTORY_END_FIELDS: Aliases = &["end_date", "endDate", "end", "to"];
/// History entry project aliases; `job.code` reaches into a nested job object.
pub const HISTORY_PROJECT_FIELDS: Aliases =
    &["project", "project_code", "projectCode", "job_code", "job.code"];

/// Extract assignments from a fetched payload.
///
/// A payload that is not an array yields no assignments.
pub fn extract_from_value(payload: &Value) -> Vec<AssignmentRecord> {
    extract_assignments(&rosterline_core::employee_records(payload))
}

/// Extract assignments from employee records.
///
/// Output order follows record order, then history order within a record.
/// No deduplication or sorting is done here.
pub fn extract_assignments(records: &[EmployeeRecord]) -> Vec<AssignmentRecord> {
    let mut out = Vec::new();
    for record in records {
        extract_record(record, &mut out);
    }
    log::debug!(
        "extracted {} assignments from {} employee records",
        out.len(),
        records.len()
    );
    out
}

fn extract_record(record: &EmployeeRecord, out: &mut Vec<AssignmentRecord>) {
    let employee = record.display_name();
    let employee_id = record.employee_id();
    let map = record.fields();

    if let Some((start, end, project)) = inline_assignment(map) {
        out.push(AssignmentRecord {
            employee: employee.clone(),
            employee_id: employee_id.clone(),
            start,
            end,
            project,
        });
    }

    let Some(history) = fields::first_array(map, HISTORY_FIELDS) else {
        return;
    };
    for (index, entry) in history.iter().enumerate() {
        match entry.as_object().and_then(history_assignment) {
            Some((start, end, project)) => out.push(AssignmentRecord {
                employee: employee.clone(),
                employee_id: employee_id.clone(),
                start,
                end,
                project,
            }),
            None => log::debug!("dropping history entry {index} for {employee}"),
        }
    }
}

type Span = (DateTime<Utc>, DateTime<Utc>, String);

fn inline_assignment(map: &Map<String, Value>) -> Option<Span> {
    let project = fields::first_text(map, &[PROJECT_FIELD])?;
    let start = parse_loose(fields::first_truthy(map, START_FIELDS)?)?;
    let end = fields::first_truthy(map, END_FIELDS)
        .and_then(parse_loose)
        .unwrap_or(start);
    Some((start, end, project))
}

fn history_assignment(entry: &Map<String, Value>) -> Option<Span> {
    let start = fields::first_truthy(entry, HISTORY_START_FIELDS).and_then(parse_loose)?;
    let end = fields::first_truthy(entry, HISTORY_END_FIELDS).and_then(parse_loose)?;
    let project = fields::first_defined(entry, HISTORY_PROJECT_FIELDS)
        .map(to_text)
        .filter(|p| !p.is_empty())?;
    Some((start, end, project))
}
