//! Outcome classification of a board snapshot.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Classification of a snapshot.
///
/// `InProgress` is the only state that accepts moves. `Win` and `Draw` are
/// terminal for the snapshot they describe, but a controller can always jump
/// back to an earlier, non-terminal snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and at least one empty cell.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
