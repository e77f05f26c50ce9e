//! Game state controller: owns the history and the view cursor.

use super::action::{Move, MoveResult};
use super::contracts::{Contract, MoveContract};
use super::error::{JumpError, ReplayError};
use super::history::History;
use super::move_list::MoveList;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Mark, Snapshot};
use serde::Serialize;
use tracing::{debug, instrument};

/// Tic-tac-toe game with time travel.
///
/// The controller is the only owner of game state. It records every board
/// the game has passed through and a cursor saying which one is being
/// viewed. Jumping moves the cursor and nothing else. Making a move from a
/// rewound position first drops the snapshots after the cursor, then
/// appends the new board.
///
/// Whose turn it is and whether the game is over are derived from the
/// cursor and the viewed snapshot on every call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameController {
    history: History,
    cursor: usize,
}

impl GameController {
    /// Creates a game at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    /// Builds a game by playing `moves` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] naming the first move the game ignored.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, ReplayError> {
        let mut game = Self::new();

        for (index, pos) in moves.iter().enumerate() {
            if let MoveResult::Ignored(rejection) = game.apply_move(*pos) {
                return Err(ReplayError { index, rejection });
            }
        }

        Ok(game)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Attempts on a finished board or an occupied cell are ignored and
    /// reported as [`MoveResult::Ignored`]; the game is left exactly as it
    /// was, so repeating the call returns the same result.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveResult {
        if let Err(rejection) = MoveContract::pre(self, &pos) {
            debug!(%rejection, "Move ignored");
            return MoveResult::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.current_turn();
        let next = self.current_snapshot().with_mark(pos, mark);

        let discarded = self.history.last_step() - self.cursor;
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after rewound cursor");
        }
        self.history.truncate_after(self.cursor);
        self.cursor = self.history.push(next);

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(
                post.is_ok(),
                "Postcondition failed: {}",
                post.err()
                    .unwrap_or_default()
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            );
        }

        let mov = Move {
            mark,
            position: pos,
            step: self.cursor,
        };
        debug!(%mov, "Move accepted");
        MoveResult::Accepted(mov)
    }

    /// Moves the view cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `step` is not a recorded step.
    /// The cursor is left where it was.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            debug!("Jump out of range");
            return Err(JumpError::OutOfRange { step, len });
        }

        self.cursor = step;
        debug!("Cursor moved");
        Ok(())
    }

    /// Snapshot under the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// Outcome of the snapshot under the cursor.
    pub fn current_outcome(&self) -> Outcome {
        rules::evaluate(self.current_snapshot())
    }

    /// Mark to play from the cursor. Only meaningful while in progress.
    pub fn current_turn(&self) -> Mark {
        Mark::for_step(self.cursor)
    }

    /// The winning line on the viewed snapshot, if any.
    pub fn current_winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_snapshot()).map(|(_, line)| line)
    }

    /// Jump targets, one per recorded snapshot.
    pub fn move_list(&self) -> MoveList<'_> {
        MoveList::new(&self.history, self.cursor)
    }

    /// Every recorded snapshot.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the cursor is behind the latest snapshot.
    pub fn is_rewound(&self) -> bool {
        self.cursor < self.history.last_step()
    }

    /// Positions a move would be accepted at.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_outcome().is_terminal() {
            Vec::new()
        } else {
            self.current_snapshot().empty_positions()
        }
    }

    /// Builds a controller from raw parts, bypassing every check.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Snapshot>, cursor: usize) -> Self {
        Self {
            history: History::from_snapshots(snapshots),
            cursor,
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
