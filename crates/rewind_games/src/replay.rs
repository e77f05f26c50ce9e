//! Headless replay: play a move sequence and print the result.

use crate::status::StatusLine;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameController, MoveEntry, Outcome, Position};
use serde::Serialize;
use tracing::{info, instrument};

/// Machine-readable replay result.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    /// Status line for the viewed snapshot.
    pub status: String,
    /// Outcome of the viewed snapshot.
    pub outcome: Outcome,
    /// Jump targets.
    pub moves: Vec<MoveEntry>,
    /// Full controller state.
    pub game: &'a GameController,
}

/// Parses a move sequence such as `"0,1,4"` or `"center top-left"`.
///
/// Entries are separated by commas or whitespace and may be board indices
/// (0-8) or position labels.
pub fn parse_moves(input: &str) -> Result<Vec<Position>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Position>()
                .with_context(|| format!("Cannot parse move {:?}", token))
        })
        .collect()
}

/// Replays `moves`, optionally jumps to `jump`, and renders the game.
#[instrument(skip(moves))]
pub fn run_replay(moves: &str, jump: Option<usize>, json: bool) -> Result<String> {
    let positions = parse_moves(moves)?;
    let mut game = GameController::replay(&positions).context("Move sequence rejected")?;
    info!(len = game.history().len(), "Replay finished");

    if let Some(step) = jump {
        game.jump_to(step).context("Cannot jump")?;
    }

    if json {
        let report = ReplayReport {
            status: StatusLine::for_game(&game).to_string(),
            outcome: game.current_outcome(),
            moves: game.move_list().iter().collect(),
            game: &game,
        };
        return serde_json::to_string_pretty(&report).context("Failed to serialize replay");
    }

    Ok(render_text(&game))
}

/// Plain-text rendering: board, status, then the move list.
pub fn render_text(game: &GameController) -> String {
    let mut out = game.current_snapshot().display();
    out.push_str("\n\n");
    out.push_str(&StatusLine::for_game(game).to_string());
    out.push('\n');

    for entry in game.move_list() {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("\n{} {}", marker, entry.label));
    }
    out
}
