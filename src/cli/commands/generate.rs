use std::path::{Path, PathBuf};

use crate::cards::build_deck;
use crate::formats::{CharacterFile, RulesDatabase};
use crate::mse;
use crate::paths;

pub fn execute(
    character: Option<&Path>,
    database: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let db_path = paths::locate_database(database)?;
    println!("Using database at {}", db_path.display());
    let db = RulesDatabase::load(&db_path)?;

    let Some(character_path) = pick_character(character)? else {
        println!("No character file selected; nothing to do.");
        return Ok(());
    };
    let character_file = CharacterFile::load(&character_path)?;

    let names = character_file.power_names();
    if names.is_empty() {
        println!(
            "No card-eligible powers in {}",
            character_path.display()
        );
        return Ok(());
    }

    let deck = build_deck(&db, &names);
    for card in &deck.cards {
        println!("Writing card: {}", card.name);
    }

    let Some(output_path) = pick_output(output, &character_path)? else {
        println!("No save location selected; nothing written.");
        return Ok(());
    };

    let document = mse::render_set(&deck.cards, &mse::timestamp_now());
    mse::write_set_archive(&output_path, &document)?;

    println!(
        "Done: {} cards in {}",
        deck.cards.len(),
        output_path.display()
    );
    if deck.skipped > 0 {
        println!(
            "Skipped {} power(s) with unrecognized action types; see warnings above.",
            deck.skipped
        );
    }
    Ok(())
}

fn pick_character(arg: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    match arg {
        Some(path) => Ok(Some(path.to_path_buf())),
        None => {
            #[cfg(feature = "dialog")]
            {
                Ok(crate::dialog::pick_character_file())
            }
            #[cfg(not(feature = "dialog"))]
            {
                anyhow::bail!(
                    "no character file given; pass --character (the file picker needs the `dialog` feature)"
                )
            }
        }
    }
}

fn pick_output(arg: Option<&Path>, character_path: &Path) -> anyhow::Result<Option<PathBuf>> {
    match arg {
        Some(path) => Ok(Some(path.to_path_buf())),
        None => {
            let suggested = format!(
                "{}.mse-set",
                character_path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "deck".to_owned())
            );
            #[cfg(feature = "dialog")]
            {
                Ok(crate::dialog::pick_save_file(&suggested))
            }
            #[cfg(not(feature = "dialog"))]
            {
                let _ = suggested;
                anyhow::bail!(
                    "no output path given; pass --output (the save dialog needs the `dialog` feature)"
                )
            }
        }
    }
}
