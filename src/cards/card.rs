//! Fully resolved card presentation

use super::{icons, text};
use crate::error::Result;
use crate::formats::RulesElement;

/// Card stock color for a "Power Usage" value (lower-cased before lookup).
///
/// `None` means the value was unrecognized; the card goes out with the
/// color unset and the user fixes it up in the layout tool.
#[must_use]
pub fn background_color(power_usage: &str) -> Option<&'static str> {
    match power_usage.to_lowercase().as_str() {
        "at-will" => Some("Green"),
        "encounter" => Some("Red"),
        "daily" => Some("Black"),
        "encounter (special)" | "daily (special)" | "" => Some("Blue"),
        _ => None,
    }
}

/// The fully resolved presentation for one power card.
#[derive(Debug, Clone)]
pub struct Card {
    pub name: String,
    /// Super type, sub type, level.
    pub header: [String; 3],
    pub power_usage: String,
    pub keywords: String,
    pub rules_text: Vec<String>,
    pub flavor_text: String,
    pub action_icon: Option<char>,
    pub range_icon: Option<char>,
    /// Abbreviated attack line; empty when the power has none.
    pub attack: String,
    /// Card stock color; `None` leaves the color unset for manual fixup.
    pub background: Option<&'static str>,
}

impl Card {
    /// Resolve one rules record into its card presentation.
    ///
    /// # Errors
    /// `Error::UnrecognizedActionType`; the caller skips the card and
    /// continues the batch.
    pub fn from_record(record: &RulesElement) -> Result<Self> {
        let action_icon = icons::action_icon(record)?;

        let power_usage = record.field("Power Usage").to_owned();
        let background = background_color(&power_usage);
        if background.is_none() {
            tracing::warn!(
                "unusual \"Power Usage\" for {}: {power_usage:?}; set the card color manually",
                record.name
            );
        }

        // Powers with a Primary/Secondary split leave the plain Attack
        // field empty; the primary stands in.
        let mut attack = text::abbreviate(record.field("Attack"));
        if attack.is_empty() {
            attack = text::abbreviate(record.field("Primary Attack"));
        }

        Ok(Self {
            name: record.name.clone(),
            header: text::display_header(record),
            keywords: record.field("Keywords").to_owned(),
            rules_text: text::rules_text(record),
            flavor_text: record.flavor.trim().to_owned(),
            action_icon,
            range_icon: icons::range_icon(record),
            attack,
            background,
            power_usage,
        })
    }
}
