//! Per-employee contact channels for detail pages.

use rosterline_core::util::fields::{self, Aliases};
use rosterline_core::{EmployeeRecord, PartialRecord};
use serde::{Deserialize, Serialize};

use crate::phone::{PhoneChannel, format_optional};

/// Work-phone aliases.
pub const WORK_PHONE_FIELDS: Aliases = &["work_phone", "workPhone", "phone", "office_phone"];
/// Mobile-phone aliases.
pub const MOBILE_PHONE_FIELDS: Aliases =
    &["cell_phone", "cellPhone", "mobile_phone", "mobilePhone", "mobile"];
/// Home-phone aliases.
pub const HOME_PHONE_FIELDS: Aliases = &["home_phone", "homePhone"];

/// Kind of phone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Office or desk line.
    Work,
    /// Cell phone.
    Mobile,
    /// Home line.
    Home,
}

impl ChannelKind {
    /// All kinds, in display order.
    pub const ALL: [ChannelKind; 3] = [ChannelKind::Work, ChannelKind::Mobile, ChannelKind::Home];

    /// Field aliases holding this kind of number.
    pub fn aliases(self) -> Aliases {
        match self {
            ChannelKind::Work => WORK_PHONE_FIELDS,
            ChannelKind::Mobile => MOBILE_PHONE_FIELDS,
            ChannelKind::Home => HOME_PHONE_FIELDS,
        }
    }

    /// Row label for detail pages.
    pub fn label(self) -> &'static str {
        match self {
            ChannelKind::Work => "Work",
            ChannelKind::Mobile => "Mobile",
            ChannelKind::Home => "Home",
        }
    }
}

/// One formatted phone line of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Which line this is.
    pub kind: ChannelKind,
    /// The formatted number.
    #[serde(flatten)]
    pub phone: PhoneChannel,
}

/// Format every phone line of an employee, in [`ChannelKind::ALL`] order.
///
/// Missing lines are still returned, showing the "no number" text, so a
/// detail page can render a fixed set of rows.
///
/// # Example
///
/// ```
/// use rosterline_contact::{ChannelKind, contact_channels};
/// use rosterline_core::{EmployeeRecord, PartialRecord};
/// use serde_json::json;
///
/// let rec = EmployeeRecord::from_value(json!({"cellPhone": "555.123.4567"})).unwrap();
/// let channels = contact_channels(&rec);
/// assert_eq!(channels[1].kind, ChannelKind::Mobile);
/// assert_eq!(channels[1].phone.text, "(555) 123-4567");
/// assert_eq!(channels[0].phone.text, "No Number Entered.");
/// ```
pub fn contact_channels(record: &EmployeeRecord) -> Vec<ContactChannel> {
    ChannelKind::ALL
        .into_iter()
        .map(|kind| {
            let raw = fields::first_text(record.fields(), kind.aliases());
            ContactChannel {
                kind,
                phone: format_optional(raw.as_deref()),
            }
        })
        .collect()
}

/// The first dialable link across channels.
pub fn primary_href(channels: &[ContactChannel]) -> Option<&str> {
    channels.iter().find_map(|c| c.phone.href.as_deref())
}
