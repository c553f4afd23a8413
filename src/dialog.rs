//! Native file-picker dialogs for the interactive flow
//!
//! Both pickers return `None` when the user cancels; callers treat that as
//! an aborted run, not an error.

use std::path::PathBuf;

use crate::paths;

/// Ask the user for a `.dnd4e` character file, starting in the Character
/// Builder's default save folder when it exists.
#[must_use]
pub fn pick_character_file() -> Option<PathBuf> {
    let dialog = rfd::FileDialog::new()
        .set_title("Open your .dnd4e character file")
        .add_filter("Character Builder files", &["dnd4e"]);

    let dialog = match paths::default_character_dir() {
        Some(dir) if dir.is_dir() => dialog.set_directory(dir),
        _ => dialog,
    };

    dialog.pick_file()
}

/// Ask the user where to save the `.mse-set` archive.
#[must_use]
pub fn pick_save_file(suggested: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save the Magic Set Editor file")
        .set_file_name(suggested)
        .add_filter("Magic Set Editor sets", &["mse-set"])
        .save_file()
}
