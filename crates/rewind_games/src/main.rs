//! rewind_games - play, rewind and branch tic-tac-toe games.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{GameConfig, logging, replay, tui};

fn main() -> Result<()> {
    // Load .env before anything reads RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = GameConfig::load(&config)?;
            tui::run_tui(&config)
        }
        Command::Replay { moves, jump, json } => {
            logging::init_stderr("warn");
            let output = replay::run_replay(&moves, jump, json)?;
            println!("{}", output);
            Ok(())
        }
    }
}
