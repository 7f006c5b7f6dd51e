//! Rosterline record normalization — umbrella crate.
//!
//! This crate re-exports all Rosterline components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use rosterline_core as core;

#[cfg(feature = "timeline")]
pub use rosterline_timeline as timeline;

#[cfg(feature = "projects")]
pub use rosterline_projects as projects;

#[cfg(feature = "contact")]
pub use rosterline_contact as contact;
