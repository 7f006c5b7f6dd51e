//! `rosterline project-keys`

use rosterline_core::timecard_rows;
use rosterline_projects::{ProjectHours, ProjectTier, resolve_with_tier, summarize_hours};
use serde::Serialize;
use serde_json::Value;

/// The resolved key for one input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowKey {
    /// Position of the row in the input.
    pub row: usize,
    /// Resolved project key.
    pub project: String,
    /// Rule that produced the key.
    pub tier: ProjectTier,
}

/// Output of the project-keys command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProjectKeysOutput {
    /// One key per row.
    Keys(Vec<RowKey>),
    /// Hour totals per key.
    Summary(Vec<ProjectHours>),
}

/// Resolve project keys for a timecard payload.
pub fn run(payload: &Value, summary: bool) -> ProjectKeysOutput {
    let rows = timecard_rows(payload);
    tracing::info!(rows = rows.len(), "resolving project keys");

    if summary {
        return ProjectKeysOutput::Summary(summarize_hours(&rows));
    }

    let keys = rows
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let (tier, project) = resolve_with_tier(record);
            RowKey { row, project, tier }
        })
        .collect();
    ProjectKeysOutput::Keys(keys)
}
