//! Phone-number formatting for Rosterline contact fields.
//!
//! # Modules
//!
//! - [`phone`]: Raw phone text → display text and `tel:` link
//! - [`channels`]: Work/mobile/home lines for an employee record

pub mod channels;
pub mod phone;

#[cfg(test)]
mod proptests;

pub use channels::{ChannelKind, ContactChannel, contact_channels, primary_href};
pub use phone::{NO_NUMBER, PhoneChannel, format_optional, format_phone};
