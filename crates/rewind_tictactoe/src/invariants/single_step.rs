//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::GameController;
use super::{Invariant, changed_positions};

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// The changed cell must have been empty before, so marks are never
/// overwritten or removed along a history.
pub struct SingleStepInvariant;

impl Invariant<GameController> for SingleStepInvariant {
    fn holds(game: &GameController) -> bool {
        game.history().as_slice().windows(2).all(|pair| {
            let changed = changed_positions(&pair[0], &pair[1]);
            changed.len() == 1 && pair[0].is_empty(changed[0])
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let game = GameController::replay(&[Position::Center, Position::TopLeft, Position::TopRight])
            .expect("valid replay");
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_unchanged_snapshot_violates() {
        let game = GameController::from_parts(vec![Snapshot::empty(), Snapshot::empty()], 0);
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let first = Snapshot::empty().with_mark(Position::Center, Mark::X);
        let second = first.with_mark(Position::Center, Mark::O);
        let game = GameController::from_parts(vec![Snapshot::empty(), first, second], 2);
        assert!(!SingleStepInvariant::holds(&game));
    }
}
