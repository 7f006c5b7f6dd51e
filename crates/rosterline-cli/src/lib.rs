//! # rosterline-cli
//!
//! Command-line front end for the Rosterline normalizers:
//! - timeline assignments from employee exports
//! - project keys and hour summaries from timecard exports
//! - phone formatting for raw strings and employee contact lines
//! - config file management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod input;
pub mod logging;

pub use error::{Error, Result};
