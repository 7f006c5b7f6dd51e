//! `rosterline assignments`

use rosterline_timeline::{
    AssignmentRecord, EmployeeLane, extract_from_value, group_by_employee, sort_by_start,
};
use serde::Serialize;
use serde_json::Value;

/// How to shape the extracted assignments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentOptions {
    /// Sort by start date.
    pub sorted: bool,
    /// Group into per-employee lanes.
    pub lanes: bool,
}

/// Output of the assignments command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AssignmentsOutput {
    /// One entry per assignment.
    Flat(Vec<AssignmentRecord>),
    /// One entry per employee.
    Lanes(Vec<EmployeeLane>),
}

/// Extract assignments from an employee payload.
pub fn run(payload: &Value, options: AssignmentOptions) -> AssignmentsOutput {
    let mut assignments = extract_from_value(payload);
    if options.sorted {
        assignments = sort_by_start(assignments);
    }
    tracing::info!(count = assignments.len(), "extracted assignments");

    if options.lanes {
        AssignmentsOutput::Lanes(group_by_employee(&assignments))
    } else {
        AssignmentsOutput::Flat(assignments)
    }
}
