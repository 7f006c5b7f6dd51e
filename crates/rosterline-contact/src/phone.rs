//! Phone-number canonicalization.
//!
//! Phone fields are free text. One field may hold several numbers
//! (`"555-123-4567 / 555-987-6543"`), an extension (`"x89"`, `"ext. 12"`), or
//! something that is not a number at all. [`format_phone`] turns that into a
//! display string plus a `tel:` link for the first number that can be
//! dialed.
//!
//! # Example
//!
//! ```
//! use rosterline_contact::format_phone;
//!
//! let channel = format_phone("555-123-4567; 1234567 x89");
//! assert_eq!(channel.text, "(555) 123-4567 • 123-4567 x89");
//! assert_eq!(channel.href.as_deref(), Some("tel:+15551234567"));
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Text shown when no phone number was entered.
pub const NO_NUMBER: &str = "No Number Entered.";

const SEGMENT_SEPARATOR: &str = " • ";

/// A formatted phone number ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneChannel {
    /// Display text; never empty.
    pub text: String,
    /// `tel:` link for the first dialable number, if any.
    pub href: Option<String>,
}

impl PhoneChannel {
    /// The channel shown when nothing was entered.
    pub fn empty() -> Self {
        Self {
            text: NO_NUMBER.to_string(),
            href: None,
        }
    }

    /// Whether a dialable link was found.
    pub fn is_dialable(&self) -> bool {
        self.href.is_some()
    }
}

fn separator_re() -> &'static Regex {
    static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_RE.get_or_init(|| Regex::new(r"[;,/|]+").expect("valid separator regex"))
}

fn extension_re() -> &'static Regex {
    static EXTENSION_RE: OnceLock<Regex> = OnceLock::new();
    EXTENSION_RE.get_or_init(|| {
        Regex::new(r"(?i)\s*(?:ext|x)\.?\s*[:#.\-]?\s*([0-9]{1,6})\s*$")
            .expect("valid extension regex")
    })
}

/// Format a raw phone field.
///
/// Blank input yields [`NO_NUMBER`] with no link. Otherwise the field is
/// split on `;`, `,`, `/` and `|`, each part is formatted on its own, and the
/// parts are joined with a bullet. The link comes from the first part that
/// could be formatted.
pub fn format_phone(raw: &str) -> PhoneChannel {
    if raw.trim().is_empty() {
        return PhoneChannel::empty();
    }

    let segments: Vec<Segment> = separator_re()
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(format_segment)
        .collect();
    if segments.is_empty() {
        // Only separators, e.g. "; /"
        return PhoneChannel::empty();
    }

    let href = segments.iter().find_map(|s| s.href.clone());
    let text = segments
        .into_iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR);
    PhoneChannel { text, href }
}

/// Format a phone field that may be missing.
pub fn format_optional(raw: Option<&str>) -> PhoneChannel {
    raw.map(format_phone).unwrap_or_else(PhoneChannel::empty)
}

struct Segment {
    text: String,
    href: Option<String>,
}

fn format_segment(segment: &str) -> Segment {
    let (body, extension) = match extension_re().captures(segment) {
        Some(caps) => {
            let start = caps.get(0).map_or(segment.len(), |m| m.start());
            (&segment[..start], caps.get(1).map(|m| m.as_str()))
        }
        None => (segment, None),
    };

    let digits: String = body.chars().filter(char::is_ascii_digit).collect();
    let national = match digits.len() {
        11 if digits.starts_with('1') => &digits[1..],
        10 | 7 => digits.as_str(),
        _ => {
            log::debug!("phone segment {segment:?} is not a dialable number");
            return Segment {
                text: segment.to_string(),
                href: None,
            };
        }
    };

    let mut text = if national.len() == 10 {
        format!("({}) {}-{}", &national[..3], &national[3..6], &national[6..])
    } else {
        format!("{}-{}", &national[..3], &national[3..])
    };
    let mut href = format!("tel:+1{national}");
    if let Some(ext) = extension {
        text.push_str(&format!(" x{ext}"));
        href.push_str(&format!(",{ext}"));
    }

    Segment {
        text,
        href: Some(href),
    }
}
