//! PowerDeck CLI - command-line interface for the card generator

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "powerdeck")]
#[command(about = "PowerDeck: printable power-card decks from Character Builder files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the PowerDeck CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
