//! Project-key resolution for timecard rows.
//!
//! A timecard row says what its hours were charged against in one of several
//! ways, depending on which system produced it. Resolution walks a fixed
//! table of tiers and returns the first key a tier can build:
//!
//! 1. distributed job / activity
//! 2. a precomputed home allocation
//! 3. a home allocation assembled from its parts
//! 4. the raw allocation code
//! 5. `"Unknown"`
//!
//! A tier that triggers always produces a key, so lower tiers are never
//! consulted once a higher one matches.
//!
//! # Example
//!
//! ```
//! use rosterline_core::{PartialRecord, TimecardRow};
//! use rosterline_projects::resolve_project_key;
//! use serde_json::json;
//!
//! let row = TimecardRow::from_value(json!({
//!     "dist_job_code": "220145",
//!     "dist_job_desc": "Bridge retrofit",
//!     "allocation_code": "J-99",
//! })).unwrap();
//! assert_eq!(resolve_project_key(&row), "220145 • Bridge retrofit");
//! ```

use rosterline_core::util::fields::{self, Aliases};
use rosterline_core::{PartialRecord, TimecardRow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key returned when a row carries no allocation data at all.
pub const UNKNOWN_PROJECT: &str = "Unknown";

const PART_SEPARATOR: &str = " • ";
const SIDE_SEPARATOR: &str = " – ";
const HOME_SEPARATOR: &str = " / ";

/// Distributed job code aliases.
pub const DIST_JOB_FIELDS: Aliases =
    &["dist_job_code", "distJobCode", "distributed_job_code", "dist_job"];
/// Distributed job description aliases.
pub const DIST_JOB_DESC_FIELDS: Aliases =
    &["dist_job_desc", "distJobDesc", "dist_job_description"];
/// Distributed activity code aliases.
pub const DIST_ACTIVITY_FIELDS: Aliases = &[
    "dist_activity_code",
    "distActivityCode",
    "distributed_activity_code",
    "dist_activity",
];
/// Distributed activity description aliases.
pub const DIST_ACTIVITY_DESC_FIELDS: Aliases = &[
    "dist_activity_desc",
    "distActivityDesc",
    "dist_activity_description",
];

/// Precomputed home-allocation aliases.
pub const HOME_ALLOCATION_FIELDS: Aliases = &["home_allocation", "homeAllocation"];

/// Home-allocation parts, in join order.
pub const HOME_PART_FIELDS: &[Aliases] = &[
    &["home_dept", "homeDept"],
    &["home_job_code", "homeJobCode"],
    &["home_section_code", "homeSectionCode"],
    &["home_activity_code", "homeActivityCode"],
    &["home_user_access_code", "homeUserAccessCode"],
    &["home_sub_dept_code", "homeSubDeptCode"],
];

/// Raw allocation-code aliases.
pub const ALLOCATION_CODE_FIELDS: Aliases = &["allocation_code", "allocationCode", "alloc_code"];

/// Which rule produced a project key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTier {
    /// Work charged to a distributed job and/or activity.
    Distributed,
    /// A home allocation supplied verbatim by the source.
    HomeAllocation,
    /// A home allocation assembled from department/job/section parts.
    SynthesizedHome,
    /// The raw allocation code.
    AllocationCode,
    /// Nothing usable was present.
    Unknown,
}

type TierBuilder = fn(&Map<String, Value>) -> Option<String>;

const TIERS: &[(ProjectTier, TierBuilder)] = &[
    (ProjectTier::Distributed, distributed),
    (ProjectTier::HomeAllocation, home_allocation),
    (ProjectTier::SynthesizedHome, synthesized_home),
    (ProjectTier::AllocationCode, allocation_code),
];

/// Resolve the project key for a row.
///
/// Always returns a non-empty string.
pub fn resolve_project_key(row: &TimecardRow) -> String {
    resolve_with_tier(row).1
}

/// Resolve the project key for a row that may be missing entirely.
pub fn resolve_optional(row: Option<&TimecardRow>) -> String {
    match row {
        Some(row) => resolve_project_key(row),
        None => UNKNOWN_PROJECT.to_string(),
    }
}

/// Resolve the project key and report which tier produced it.
pub fn resolve_with_tier(row: &TimecardRow) -> (ProjectTier, String) {
    let map = row.fields();
    for (tier, build) in TIERS {
        if let Some(key) = build(map) {
            log::trace!("project key {key:?} resolved by {tier:?} tier");
            return (*tier, key);
        }
    }
    (ProjectTier::Unknown, UNKNOWN_PROJECT.to_string())
}

fn distributed(map: &Map<String, Value>) -> Option<String> {
    let job = fields::first_text(map, DIST_JOB_FIELDS);
    let activity = fields::first_text(map, DIST_ACTIVITY_FIELDS);
    if job.is_none() && activity.is_none() {
        return None;
    }

    let left = join_present(
        [job, fields::first_text(map, DIST_JOB_DESC_FIELDS)],
        PART_SEPARATOR,
    );
    let right = join_present(
        [activity, fields::first_text(map, DIST_ACTIVITY_DESC_FIELDS)],
        PART_SEPARATOR,
    );

    // An empty left side is kept so activity-only rows read " – <activity>".
    if right.is_empty() {
        Some(left)
    } else {
        Some(format!("{left}{SIDE_SEPARATOR}{right}"))
    }
}

fn home_allocation(map: &Map<String, Value>) -> Option<String> {
    fields::first_text(map, HOME_ALLOCATION_FIELDS)
}

fn synthesized_home(map: &Map<String, Value>) -> Option<String> {
    let parts = HOME_PART_FIELDS
        .iter()
        .map(|aliases| fields::first_text(map, aliases));
    let joined = join_present(parts, HOME_SEPARATOR);
    (!joined.is_empty()).then_some(joined)
}

fn allocation_code(map: &Map<String, Value>) -> Option<String> {
    fields::first_text(map, ALLOCATION_CODE_FIELDS)
}

fn join_present(parts: impl IntoIterator<Item = Option<String>>, separator: &str) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(separator)
}
