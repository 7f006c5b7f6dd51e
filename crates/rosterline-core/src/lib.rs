//! Rosterline Core — shared types, errors, and record-reading utilities.
//!
//! This crate provides the foundational pieces used across all Rosterline
//! crates. It has no internal Rosterline dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`records`]: Boundary record types for employee and timecard payloads
//! - [`util`]: Alias-field lookup, value coercion, and date parsing

#![doc = include_str!("../README.md")]

pub mod error;
pub mod records;
pub mod util;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use records::{EmployeeRecord, PartialRecord, TimecardRow, employee_records, parse_json, timecard_rows};

// Convenience re-exports from util
pub use util::coerce::{is_truthy, to_text};
pub use util::dates::parse_loose;
pub use util::fields::{Aliases, first_defined, first_text, first_truthy};
