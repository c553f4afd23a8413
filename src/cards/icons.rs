//! Action and range icon resolution
//!
//! Icons are single characters in the layout tool's symbol font. Action
//! icons come from a closed lookup over the title-cased action type; range
//! icons classify the attack-type phrase by its first two words, first
//! word taking precedence.

use super::text::title_case;
use crate::error::{Error, Result};
use crate::formats::RulesElement;

/// Targeting-shape classification of an "Attack Type" phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    None,
    Melee,
    MeleeOrRanged,
    MeleeTouch,
    Ranged,
    CloseBurst,
    CloseBlast,
    Area,
    Personal,
}

impl RangeKind {
    /// Classify an attack-type phrase. Unrecognized phrases are `None`.
    #[must_use]
    pub fn classify(attack_type: &str) -> Self {
        let mut words = attack_type.split_whitespace();
        let first = words.next().unwrap_or("");
        let second = words.next().unwrap_or("");

        match first {
            "Ranged" => Self::Ranged,
            "Area" => Self::Area,
            "Personal" => Self::Personal,
            "Melee" => match second {
                "or" => Self::MeleeOrRanged,
                "touch" => Self::MeleeTouch,
                _ => Self::Melee,
            },
            "Close" => {
                if second == "blast" {
                    Self::CloseBlast
                } else {
                    Self::CloseBurst
                }
            }
            _ => Self::None,
        }
    }

    /// Symbol-font code for this shape.
    #[must_use]
    pub fn icon(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Melee => Some('e'),
            Self::Ranged => Some('r'),
            Self::MeleeOrRanged => Some('n'),
            Self::CloseBlast => Some('b'),
            Self::CloseBurst => Some('u'),
            Self::Area => Some('U'),
            Self::Personal => Some('p'),
            Self::MeleeTouch => Some('t'),
        }
    }
}

/// Action-economy icon for a power, from its title-cased "Action Type".
///
/// # Errors
/// `Error::UnrecognizedActionType` when the value falls outside the
/// recognized set; callers skip the card and continue the batch.
pub fn action_icon(record: &RulesElement) -> Result<Option<char>> {
    let action_type = title_case(record.field("Action Type"));
    match action_type.as_str() {
        "Standard Action" => Ok(Some('s')),
        "Move Action" => Ok(Some('o')),
        "Minor Action" => Ok(Some('m')),
        "Immediate Interrupt" | "Immediate Reaction" | "Opportunity Action" => Ok(Some('i')),
        "Free Action" | "No Action" => Ok(Some('f')),
        "" => Ok(None),
        _ => Err(Error::UnrecognizedActionType {
            power: record.name.clone(),
            value: action_type,
        }),
    }
}

/// Targeting-shape icon for a power, from its "Attack Type". Total:
/// unrecognized phrases yield no icon rather than an error.
#[must_use]
pub fn range_icon(record: &RulesElement) -> Option<char> {
    RangeKind::classify(record.field("Attack Type")).icon()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::formats::RulesField;

    fn record_with(fields: &[(&str, &str)]) -> RulesElement {
        RulesElement {
            kind: "Power".into(),
            name: "Test Power".into(),
            fields: fields
                .iter()
                .map(|(name, text)| RulesField {
                    name: (*name).into(),
                    text: (*text).into(),
                })
                .collect(),
            flavor: String::new(),
        }
    }

    #[test]
    fn action_icons_cover_the_recognized_set() {
        for (value, icon) in [
            ("Standard Action", 's'),
            ("Move Action", 'o'),
            ("Minor Action", 'm'),
            ("Immediate Interrupt", 'i'),
            ("Immediate Reaction", 'i'),
            ("Opportunity Action", 'i'),
            ("Free Action", 'f'),
            ("No Action", 'f'),
        ] {
            let record = record_with(&[("Action Type", value)]);
            assert_eq!(action_icon(&record).unwrap(), Some(icon), "{value}");
        }
    }

    #[test]
    fn action_icon_title_cases_before_lookup() {
        let record = record_with(&[("Action Type", "standard action")]);
        assert_eq!(action_icon(&record).unwrap(), Some('s'));
    }

    #[test]
    fn missing_action_type_has_no_icon() {
        let record = record_with(&[]);
        assert_eq!(action_icon(&record).unwrap(), None);
    }

    #[test]
    fn unrecognized_action_type_is_an_error() {
        let record = record_with(&[("Action Type", "Extended Rest")]);
        assert!(matches!(
            action_icon(&record),
            Err(Error::UnrecognizedActionType { .. })
        ));
    }

    #[test]
    fn range_icons_follow_first_then_second_word() {
        for (value, icon) in [
            ("Melee weapon", Some('e')),
            ("Melee", Some('e')),
            ("Melee 1", Some('e')),
            ("Melee touch", Some('t')),
            ("Melee or Ranged weapon", Some('n')),
            ("Ranged 10", Some('r')),
            ("Close burst 1", Some('u')),
            ("Close blast 5", Some('b')),
            ("Area burst 1 within 10", Some('U')),
            ("Personal", Some('p')),
            ("", None),
            ("Wall 8 within 10", None),
        ] {
            let record = record_with(&[("Attack Type", value)]);
            assert_eq!(range_icon(&record), icon, "{value:?}");
        }
    }
}
