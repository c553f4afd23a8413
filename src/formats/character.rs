//! Character Builder export (`.dnd4e`) format handler
//!
//! The export is a large XML document; only the `CharacterSheet` section's
//! `PowerStats` collection matters here. Each of its children names one
//! power the character knows via a `name` attribute.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use super::attr_value;
use crate::cards::tables::STANDARD_CARDS;
use crate::error::{Error, Result};

/// The power list scraped from one character file.
#[derive(Debug, Clone)]
pub struct CharacterFile {
    powers: Vec<String>,
}

impl CharacterFile {
    /// Read and parse a character file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let character = Self::from_xml(&content)?;
        tracing::info!(
            "Found {} powers in {:?}",
            character.powers.len(),
            path.as_ref()
        );
        Ok(character)
    }

    /// Parse character XML.
    pub fn from_xml(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);

        let mut powers = Vec::new();
        let mut buf = Vec::new();

        let mut depth = 0usize;
        let mut sheet_seen = false;
        let mut in_sheet = false;
        let mut sheet_depth = 0usize;
        let mut stats_seen = false;
        let mut in_stats = false;
        let mut stats_depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    match e.name().as_ref() {
                        b"CharacterSheet" if !in_sheet => {
                            in_sheet = true;
                            sheet_seen = true;
                            sheet_depth = depth;
                        }
                        b"PowerStats" if in_sheet && !in_stats => {
                            in_stats = true;
                            stats_seen = true;
                            stats_depth = depth;
                        }
                        _ => {
                            // Only direct children of PowerStats name powers.
                            if in_stats
                                && depth == stats_depth + 1
                                && let Some(name) = attr_value(&e, b"name")?
                            {
                                powers.push(name);
                            }
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    if e.name().as_ref() == b"PowerStats" {
                        // Present but empty: a character with no powers.
                        if in_sheet && !in_stats {
                            stats_seen = true;
                        }
                    } else if in_stats
                        && depth == stats_depth
                        && let Some(name) = attr_value(&e, b"name")?
                    {
                        powers.push(name);
                    }
                }
                Ok(Event::End(_)) => {
                    if in_stats && depth == stats_depth {
                        in_stats = false;
                    }
                    if in_sheet && depth == sheet_depth {
                        in_sheet = false;
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlError(e)),
                _ => {}
            }
            buf.clear();
        }

        if !sheet_seen {
            return Err(Error::MissingCharacterSheet);
        }
        if !stats_seen {
            return Err(Error::MissingPowerStats);
        }
        Ok(Self { powers })
    }

    /// Every power the character knows, in source order.
    #[must_use]
    pub fn all_power_names(&self) -> &[String] {
        &self.powers
    }

    /// Card-eligible power names: source order, standard cards removed.
    /// Duplicates are kept; each occurrence yields a card.
    #[must_use]
    pub fn power_names(&self) -> Vec<String> {
        self.powers
            .iter()
            .filter(|name| !STANDARD_CARDS.contains(&name.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<D20Character game-system="D&amp;D4E">
  <CharacterSheet>
    <Details>
      <name>Harwin</name>
    </Details>
    <PowerStats>
      <Power name="Melee Basic Attack">
        <specific name="Power Usage"> At-Will </specific>
      </Power>
      <Power name="Ranged Basic Attack" />
      <Power name="Test Strike" />
      <Power name="Second Wind" />
      <Power name="Test Strike" />
    </PowerStats>
  </CharacterSheet>
</D20Character>"#;

    #[test]
    fn collects_powers_in_source_order() {
        let character = CharacterFile::from_xml(SAMPLE).unwrap();
        assert_eq!(
            character.all_power_names(),
            [
                "Melee Basic Attack",
                "Ranged Basic Attack",
                "Test Strike",
                "Second Wind",
                "Test Strike"
            ]
        );
    }

    #[test]
    fn standard_cards_are_excluded_and_duplicates_kept() {
        let character = CharacterFile::from_xml(SAMPLE).unwrap();
        assert_eq!(
            character.power_names(),
            ["Test Strike", "Second Wind", "Test Strike"]
        );
    }

    #[test]
    fn nested_names_are_not_powers() {
        // The specific elements inside a Power carry name attributes too.
        let character = CharacterFile::from_xml(SAMPLE).unwrap();
        assert!(
            !character
                .all_power_names()
                .iter()
                .any(|n| n == "Power Usage")
        );
    }

    #[test]
    fn empty_power_stats_is_a_character_with_no_powers() {
        let xml = "<D20Character><CharacterSheet><PowerStats /></CharacterSheet></D20Character>";
        let character = CharacterFile::from_xml(xml).unwrap();
        assert!(character.all_power_names().is_empty());
    }

    #[test]
    fn missing_character_sheet_is_an_error() {
        let result = CharacterFile::from_xml("<D20Character></D20Character>");
        assert!(matches!(result, Err(Error::MissingCharacterSheet)));
    }

    #[test]
    fn missing_power_stats_is_an_error() {
        let xml = "<D20Character><CharacterSheet></CharacterSheet></D20Character>";
        let result = CharacterFile::from_xml(xml);
        assert!(matches!(result, Err(Error::MissingPowerStats)));
    }
}
