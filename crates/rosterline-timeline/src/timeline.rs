//! Gantt-view helpers over extracted assignments.
//!
//! The extractor keeps source order; these helpers produce the orderings and
//! bounds the timeline widget needs.

use chrono::{DateTime, Utc};

use crate::types::{AssignmentRecord, EmployeeLane};

/// Sort assignments by start date. Ties keep their input order.
pub fn sort_by_start(mut assignments: Vec<AssignmentRecord>) -> Vec<AssignmentRecord> {
    assignments.sort_by_key(|a| a.start);
    assignments
}

/// Earliest start and latest end across all assignments.
///
/// Returns `None` for an empty slice.
pub fn timeline_span(assignments: &[AssignmentRecord]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = assignments.iter().map(|a| a.start).min()?;
    let end = assignments.iter().map(|a| a.end).max()?;
    Some((start, end))
}

/// Group assignments into one lane per employee.
///
/// Lanes appear in first-seen order and keep their assignments in input
/// order. Two records with the same name but different ids are different
/// lanes.
pub fn group_by_employee(assignments: &[AssignmentRecord]) -> Vec<EmployeeLane> {
    let mut lanes: Vec<EmployeeLane> = Vec::new();
    for assignment in assignments {
        let existing = lanes.iter_mut().find(|lane| {
            lane.employee == assignment.employee && lane.employee_id == assignment.employee_id
        });
        match existing {
            Some(lane) => lane.assignments.push(assignment.clone()),
            None => lanes.push(EmployeeLane {
                employee: assignment.employee.clone(),
                employee_id: assignment.employee_id.clone(),
                assignments: vec![assignment.clone()],
            }),
        }
    }
    lanes
}
