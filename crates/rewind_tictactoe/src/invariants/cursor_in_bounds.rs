//! Cursor invariant: the view cursor points at a recorded snapshot.

use super::super::GameController;
use super::Invariant;

/// Invariant: `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameController> for CursorInBoundsInvariant {
    fn holds(game: &GameController) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
