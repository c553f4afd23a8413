//! Platform default locations for the two input documents

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the compendium database.
pub const DATABASE_FILE_NAME: &str = "combined.dnd40";

/// Default compendium location under the platform data directory.
#[must_use]
pub fn default_database_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("CBLoader").join(DATABASE_FILE_NAME))
}

/// Default folder the Character Builder saves characters to.
#[must_use]
pub fn default_character_dir() -> Option<PathBuf> {
    dirs::document_dir().map(|p| p.join("ddi").join("Saved Characters"))
}

/// Find the rules database: an explicit path, the working directory, then
/// the platform default.
///
/// # Errors
/// `Error::DatabaseNotFound` listing every location checked.
pub fn locate_database(explicit: Option<&Path>) -> Result<PathBuf> {
    let mut searched = Vec::new();

    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        searched.push(path.to_path_buf());
    } else {
        let local = PathBuf::from(DATABASE_FILE_NAME);
        if local.exists() {
            tracing::info!("Using database found in the working directory");
            return Ok(local);
        }
        searched.push(local);

        if let Some(default) = default_database_path() {
            if default.exists() {
                tracing::info!("Using database found at {default:?}");
                return Ok(default);
            }
            searched.push(default);
        }
    }

    let searched = searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::DatabaseNotFound { searched })
}
