//! Rules database (`combined.dnd40`) format handler
//!
//! The compendium is one large XML document whose root children are
//! `RulesElement` nodes, each carrying `type` and `name` attributes. Direct
//! children with a `name` attribute are the element's fields; a
//! `Flavor`-tagged child carries flavor text. Nested markup below a field
//! does not belong to it - only the text before the first nested element
//! counts.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::attr_value;
use crate::error::{Error, Result};

/// One named field of a rules element, in document order.
#[derive(Debug, Clone)]
pub struct RulesField {
    pub name: String,
    /// Raw field text, whitespace preserved.
    pub text: String,
}

/// One `RulesElement` from the compendium.
#[derive(Debug, Clone, Default)]
pub struct RulesElement {
    /// The `type` attribute ("Power", "Feat", "Class", ...).
    pub kind: String,
    /// The `name` attribute.
    pub name: String,
    /// Direct children carrying a `name` attribute, in document order.
    pub fields: Vec<RulesField>,
    /// Text of the `Flavor` child, if any.
    pub flavor: String,
}

impl RulesElement {
    /// First non-empty text for the named field, trimmed, or `""`.
    ///
    /// Duplicate fields are tolerated by taking the first that has text.
    /// Absence is represented by the empty string, not an error.
    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .map(|f| f.text.trim())
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }

    /// Whether any field with the given name is present, empty or not.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    fn field_count(&self, name: &str) -> usize {
        self.fields.iter().filter(|f| f.name == name).count()
    }
}

/// The parsed compendium, read-only for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct RulesDatabase {
    pub elements: Vec<RulesElement>,
}

impl RulesDatabase {
    /// Read and parse a database file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let db = Self::from_xml(&content)?;
        tracing::info!(
            "Loaded {} rules elements from {:?}",
            db.elements.len(),
            path.as_ref()
        );
        Ok(db)
    }

    /// Parse database XML.
    pub fn from_xml(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        // Don't trim text - interior spacing in rules text is significant.
        reader.trim_text(false);

        let mut elements: Vec<RulesElement> = Vec::new();
        let mut buf = Vec::new();

        let mut depth = 0usize;
        let mut current: Option<RulesElement> = None;
        let mut element_depth = 0usize;
        // Accumulator for the open direct child; `child_name` is None while
        // the child is the Flavor tag.
        let mut child_text: Option<String> = None;
        let mut child_name: Option<String> = None;
        let mut child_is_flavor = false;
        let mut child_nested = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    if e.name().as_ref() == b"RulesElement" {
                        current = Some(element_from_attrs(&e)?);
                        element_depth = depth;
                    } else if current.is_some() {
                        if depth == element_depth + 1 {
                            if e.name().as_ref() == b"Flavor" {
                                child_is_flavor = true;
                                child_text = Some(String::new());
                                child_nested = false;
                            } else if let Some(name) = attr_value(&e, b"name")? {
                                child_name = Some(name);
                                child_text = Some(String::new());
                                child_nested = false;
                            }
                        } else if child_text.is_some() {
                            // Markup inside a field: only the text before it counts.
                            child_nested = true;
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    if e.name().as_ref() == b"RulesElement" {
                        elements.push(element_from_attrs(&e)?);
                    } else if let Some(element) = current.as_mut()
                        && depth == element_depth
                        && let Some(name) = attr_value(&e, b"name")?
                    {
                        element.fields.push(RulesField {
                            name,
                            text: String::new(),
                        });
                    }
                }
                Ok(Event::Text(e)) => {
                    if depth == element_depth + 1
                        && !child_nested
                        && let Some(text) = child_text.as_mut()
                    {
                        text.push_str(&e.unescape().map_err(Error::XmlError)?);
                    }
                }
                Ok(Event::End(e)) => {
                    if depth == element_depth + 1 {
                        if let (Some(element), Some(text)) = (current.as_mut(), child_text.take()) {
                            if child_is_flavor {
                                element.flavor = text;
                                child_is_flavor = false;
                            } else if let Some(name) = child_name.take() {
                                element.fields.push(RulesField { name, text });
                            }
                        }
                        child_nested = false;
                    } else if depth == element_depth
                        && e.name().as_ref() == b"RulesElement"
                        && let Some(done) = current.take()
                    {
                        elements.push(done);
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlError(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { elements })
    }

    /// First `type="Power"` element with the given name.
    #[must_use]
    pub fn find_power(&self, name: &str) -> Option<&RulesElement> {
        self.elements
            .iter()
            .find(|e| e.kind == "Power" && e.name == name)
    }

    /// Every element of the given kind, in document order.
    pub fn elements_of_kind<'a>(
        &'a self,
        kind: &'a str,
    ) -> impl Iterator<Item = &'a RulesElement> + 'a {
        self.elements.iter().filter(move |e| e.kind == kind)
    }
}

fn element_from_attrs(e: &BytesStart<'_>) -> Result<RulesElement> {
    Ok(RulesElement {
        kind: attr_value(e, b"type")?.unwrap_or_default(),
        name: attr_value(e, b"name")?.unwrap_or_default(),
        fields: Vec::new(),
        flavor: String::new(),
    })
}

/// Elements of `kind` lacking any field named `field`.
#[must_use]
pub fn audit_missing_field<'a>(
    db: &'a RulesDatabase,
    kind: &'a str,
    field: &str,
) -> Vec<&'a RulesElement> {
    db.elements_of_kind(kind)
        .filter(|e| !e.has_field(field))
        .collect()
}

/// Elements of `kind` carrying more than one field named `field`.
#[must_use]
pub fn audit_duplicate_field<'a>(
    db: &'a RulesDatabase,
    kind: &'a str,
    field: &str,
) -> Vec<&'a RulesElement> {
    db.elements_of_kind(kind)
        .filter(|e| e.field_count(field) > 1)
        .collect()
}
