//! Hour totals per project key.

use rosterline_core::util::coerce::to_number;
use rosterline_core::util::fields::{self, Aliases};
use rosterline_core::{PartialRecord, TimecardRow};
use serde::{Deserialize, Serialize};

use crate::resolver::resolve_project_key;

/// Hour-count aliases.
pub const HOURS_FIELDS: Aliases = &["hours", "total_hours", "totalHours", "hrs"];

/// Total hours charged to one project key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHours {
    /// Resolved project key.
    pub project: String,
    /// Sum of hours across rows with this key.
    pub hours: f64,
    /// Number of rows with this key.
    pub rows: usize,
}

/// Hours recorded on a row; missing or non-numeric values count as zero.
pub fn row_hours(row: &TimecardRow) -> f64 {
    fields::first_defined(row.fields(), HOURS_FIELDS)
        .and_then(to_number)
        .unwrap_or(0.0)
}

/// Sum hours per project key, keeping keys in first-seen order.
pub fn summarize_hours(rows: &[TimecardRow]) -> Vec<ProjectHours> {
    let mut totals: Vec<ProjectHours> = Vec::new();
    for row in rows {
        let project = resolve_project_key(row);
        let hours = row_hours(row);
        match totals.iter_mut().find(|t| t.project == project) {
            Some(total) => {
                total.hours += hours;
                total.rows += 1;
            }
            None => totals.push(ProjectHours {
                project,
                hours,
                rows: 1,
            }),
        }
    }
    totals
}
