//! Assignment extraction for the Rosterline timeline view.
//!
//! Employee records arrive with a project inline, a nested history of
//! transfers, both, or neither. This crate flattens them into
//! [`AssignmentRecord`]s and provides the sort, span and per-employee
//! grouping the Gantt widget consumes.
//!
//! # Modules
//!
//! - [`extract`]: Record-to-assignment derivation
//! - [`timeline`]: Sorting, axis bounds, and lane grouping
//! - [`types`]: `AssignmentRecord` and `EmployeeLane`

pub mod extract;
pub mod timeline;
pub mod types;

#[cfg(test)]
mod proptests;

pub use extract::{extract_assignments, extract_from_value};
pub use timeline::{group_by_employee, sort_by_start, timeline_span};
pub use types::{AssignmentRecord, EmployeeLane};
