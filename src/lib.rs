//! # PowerDeck
//!
//! A pure-Rust tool for turning D&D 4e Character Builder exports into
//! printable power-card decks for Magic Set Editor.
//!
//! The pipeline reads two XML documents - the CBLoader compendium database
//! (`combined.dnd40`) and a character file (`.dnd4e`) - resolves each of
//! the character's powers against the compendium, formats one card per
//! power, and packs the rendered set document into an `.mse-set` zip.
//!
//! ## Quick Start
//!
//! ```no_run
//! use powerdeck::prelude::*;
//!
//! let db = RulesDatabase::load("combined.dnd40")?;
//! let character = CharacterFile::load("Warden.dnd4e")?;
//!
//! let deck = build_deck(&db, &character.power_names());
//! let document = render_set(&deck.cards, &timestamp_now());
//! write_set_archive("Warden.mse-set", &document)?;
//! # Ok::<(), powerdeck::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `powerdeck` command-line binary
//! - `dialog` - Native file pickers for the interactive flow

pub mod cards;
pub mod error;
pub mod formats;
pub mod mse;
pub mod paths;

// File pickers (feature-gated)
#[cfg(feature = "dialog")]
pub mod dialog;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::cards::{Card, Deck, RangeKind, build_deck, resolve_records};
    pub use crate::error::{Error, Result};
    pub use crate::formats::{CharacterFile, RulesDatabase, RulesElement, RulesField};
    pub use crate::mse::{SET_ENTRY_NAME, render_set, timestamp_now, write_set_archive};
    pub use crate::paths::locate_database;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
