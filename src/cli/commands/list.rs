use std::path::Path;

use crate::formats::CharacterFile;

pub fn execute(character: &Path, all: bool) -> anyhow::Result<()> {
    let character_file = CharacterFile::load(character)?;

    let names = if all {
        character_file.all_power_names().to_vec()
    } else {
        character_file.power_names()
    };

    for name in &names {
        println!("{name}");
    }
    println!("{} power(s)", names.len());
    Ok(())
}
