//! Terminal invariant: nothing is recorded after a finished board.

use super::super::{GameController, rules};
use super::Invariant;

/// Invariant: only the latest snapshot may be won or drawn.
pub struct NoMoveAfterTerminalInvariant;

impl Invariant<GameController> for NoMoveAfterTerminalInvariant {
    fn holds(game: &GameController) -> bool {
        let snapshots = game.history().as_slice();
        let (_, earlier) = match snapshots.split_last() {
            Some(split) => split,
            None => return true,
        };

        earlier
            .iter()
            .all(|board| !rules::evaluate(board).is_terminal())
    }

    fn description() -> &'static str {
        "No move is recorded after the game ended"
    }
}
