//! `rosterline phone`

use rosterline_contact::{PhoneChannel, format_phone};

/// Format each raw phone argument.
pub fn run(raw: &[String]) -> Vec<PhoneChannel> {
    raw.iter().map(|r| format_phone(r)).collect()
}
