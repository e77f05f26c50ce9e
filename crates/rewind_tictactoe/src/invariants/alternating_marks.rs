//! Alternating marks invariant: X, O, X, O, ...

use super::super::{Cell, GameController, Mark};
use super::{Invariant, changed_positions};

/// Invariant: marks alternate, starting with X.
///
/// The cell filled at step `k` holds the mark of the player to move at
/// step `k - 1`.
pub struct AlternatingMarksInvariant;

impl Invariant<GameController> for AlternatingMarksInvariant {
    fn holds(game: &GameController) -> bool {
        game.history()
            .as_slice()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Cell::Marked(Mark::for_step(step));
                changed_positions(&pair[0], &pair[1])
                    .iter()
                    .all(|pos| pair[1].get(*pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ..."
    }
}
