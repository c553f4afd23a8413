//! XML document handlers for the two input formats
//!
//! - `rules` - the compendium rules database (`combined.dnd40`)
//! - `character` - Character Builder exports (`.dnd4e`)

pub mod character;
pub mod rules;

// Re-export main document types
pub use character::CharacterFile;
pub use rules::{RulesDatabase, RulesElement, RulesField};

use quick_xml::events::BytesStart;

use crate::error::Result;

/// Read a named attribute off an element, unescaping entities.
pub(crate) fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
