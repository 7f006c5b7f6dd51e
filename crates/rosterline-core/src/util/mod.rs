//! Utility modules for reading loosely-structured records.
//!
//! # Modules
//!
//! - [`coerce`]: Truthiness and display-text coercion for JSON values
//! - [`dates`]: Loose calendar parsing
//! - [`fields`]: Ordered alias-field lookup

pub mod coerce;
pub mod dates;
pub mod fields;
