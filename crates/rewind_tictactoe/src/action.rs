//! Move events and their results.
//!
//! A move attempt either lands on the board or is ignored. Ignoring is a
//! normal result, not an error: double clicks and clicks on a finished
//! board happen all the time and must leave the game untouched.

use super::outcome::Outcome;
use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
    /// History step of the snapshot this move produced.
    pub step: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.step, self.mark, self.position.label())
    }
}

/// Why a move attempt was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The viewed snapshot is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

/// Result of [`GameController::apply_move`](crate::GameController::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was applied and appended to history.
    Accepted(Move),
    /// The move was ignored; state is unchanged.
    Ignored(MoveRejection),
}

impl MoveResult {
    /// Returns the accepted move, if any.
    pub fn accepted(&self) -> Option<Move> {
        match self {
            MoveResult::Accepted(mov) => Some(*mov),
            MoveResult::Ignored(_) => None,
        }
    }

    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }
}
