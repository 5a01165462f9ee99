//! Gridlock CLI - play the 7x7 blockade game or analyze positions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridlock")]
#[command(version, about = "A 7x7 blockade game with a tree-search engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(gridlock::cli::commands::play::PlayArgs),

    /// Analyze a position: tree statistics and the engine's move
    Analyze(gridlock::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => gridlock::cli::commands::play::execute(args),
        Commands::Analyze(args) => gridlock::cli::commands::analyze::execute(args),
    }
}
