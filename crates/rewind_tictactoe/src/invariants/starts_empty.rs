//! Opening invariant: history starts from the empty board.

use super::super::{GameController, Snapshot};
use super::Invariant;

/// Invariant: step 0 is the all-empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameController> for StartsEmptyInvariant {
    fn holds(game: &GameController) -> bool {
        game.history().get(0) == Some(&Snapshot::empty())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
