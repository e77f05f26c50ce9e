//! Error types for the game core.

use super::action::MoveRejection;
use derive_more::{Display, Error};

/// A history jump outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// The requested step is not in `0..len`.
    #[display("Step {step} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// A replayed move sequence contained a move the game ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {index} cannot be replayed: {rejection}")]
pub struct ReplayError {
    /// Index of the offending move in the input sequence.
    pub index: usize,
    /// Why the move was ignored.
    pub rejection: MoveRejection,
}

/// Input that names no board position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid position: {input:?} (expected 0-8 or a label like \"center\")")]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl PositionParseError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
