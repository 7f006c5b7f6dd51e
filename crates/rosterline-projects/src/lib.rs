//! Project-key resolution for Rosterline timecards.
//!
//! Every timecard row is reduced to one human-readable key naming what its
//! hours were charged against. See [`resolver`] for the tier order.
//!
//! # Modules
//!
//! - [`resolver`]: Tiered project-key resolution
//! - [`summary`]: Hour totals grouped by project key

pub mod resolver;
pub mod summary;


pub use resolver::{
    ProjectTier, UNKNOWN_PROJECT, resolve_optional, resolve_project_key, resolve_with_tier,
};
pub use summary::{ProjectHours, row_hours, summarize_hours};
