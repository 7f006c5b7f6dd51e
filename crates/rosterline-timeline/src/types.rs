//! Timeline view-model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time-bounded association between an employee and a project.
///
/// Both dates are always valid and `project` is never empty; the extractor
/// drops anything that cannot satisfy that rather than emitting a partial
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    /// Display name of the employee.
    pub employee: String,
    /// Employee identifier, when the record carried one.
    pub employee_id: Option<String>,
    /// Start of the assignment.
    pub start: DateTime<Utc>,
    /// End of the assignment.
    pub end: DateTime<Utc>,
    /// Project or job the employee was assigned to.
    pub project: String,
}

impl AssignmentRecord {
    /// Length of the assignment; negative when the source had end before start.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// All assignments belonging to one employee, in display order.
///
/// A lane is one row of the Gantt chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLane {
    /// Display name of the employee.
    pub employee: String,
    /// Employee identifier, when known.
    pub employee_id: Option<String>,
    /// The employee's assignments.
    pub assignments: Vec<AssignmentRecord>,
}
