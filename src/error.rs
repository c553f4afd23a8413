//! Error types for `PowerDeck`

use thiserror::Error;

/// The error type for `PowerDeck` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Rules Database Errors ====================
    /// The rules database was not found in any checked location.
    #[error(
        "rules database not found (searched: {searched}); copy your combined.dnd40 file into the working directory and run again"
    )]
    DatabaseNotFound {
        /// The locations that were checked, comma-separated.
        searched: String,
    },

    /// A power carries an action type outside the recognized set.
    #[error("unrecognized \"Action Type\" for {power}: {value:?}")]
    UnrecognizedActionType {
        /// Name of the affected power.
        power: String,
        /// The unrecognized action-type text, title-cased.
        value: String,
    },

    // ==================== Character File Errors ====================
    /// The character file has no `CharacterSheet` section.
    #[error("character file has no CharacterSheet section")]
    MissingCharacterSheet,

    /// The character sheet has no `PowerStats` collection.
    #[error("character sheet has no PowerStats collection")]
    MissingPowerStats,

    // ==================== Archive Errors ====================
    /// ZIP archive creation error.
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `PowerDeck` operations.
pub type Result<T> = std::result::Result<T, Error>;
