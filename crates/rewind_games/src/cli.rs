//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with history time travel.
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe you can rewind and branch", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the TOML config file (defaults apply if it is missing)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,
    },

    /// Replay a move sequence and print the resulting game
    Replay {
        /// Moves as indices 0-8 or labels, separated by commas or spaces
        moves: String,

        /// View this step instead of the latest one
        #[arg(long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
