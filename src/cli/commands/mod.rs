use clap::Subcommand;
use std::path::PathBuf;

pub mod check;
pub mod generate;
pub mod list;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an .mse-set card deck from a character file
    Generate {
        /// Character Builder .dnd4e file (file dialog if omitted)
        #[arg(short, long)]
        character: Option<PathBuf>,

        /// Rules database (combined.dnd40); default locations are searched
        /// if omitted
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Output .mse-set file (save dialog if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the card-eligible powers in a character file
    List {
        /// Character Builder .dnd4e file
        character: PathBuf,

        /// Include the standard cards common to all characters
        #[arg(long)]
        all: bool,
    },

    /// Audit a rules database for structural defects
    Check {
        /// Rules database (combined.dnd40); default locations are searched
        /// if omitted
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Generate {
                character,
                database,
                output,
            } => generate::execute(character.as_deref(), database.as_deref(), output.as_deref()),
            Commands::List { character, all } => list::execute(character, *all),
            Commands::Check { database } => check::execute(database.as_deref()),
        }
    }
}
