//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}.

use super::action::MoveRejection;
use super::controller::GameController;
use super::invariants::{ControllerInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Why an action is refused.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the viewed snapshot is still in progress.
pub struct GameInProgress;

impl GameInProgress {
    /// Checks that the viewed snapshot accepts moves.
    pub fn check(game: &GameController) -> Result<(), MoveRejection> {
        let outcome = game.current_outcome();
        if outcome.is_terminal() {
            Err(MoveRejection::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty on the viewed snapshot.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that `pos` is free on the viewed snapshot.
    pub fn check(pos: Position, game: &GameController) -> Result<(), MoveRejection> {
        if game.current_snapshot().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::Occupied(pos))
        }
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Viewed snapshot is in progress
/// - Target cell is empty
///
/// Postconditions:
/// - History is the pre-move history up to the cursor plus one snapshot
/// - Cursor sits on the new snapshot
/// - Every controller invariant holds
pub struct MoveContract;

impl Contract<GameController, Position> for MoveContract {
    type Rejection = MoveRejection;

    fn pre(game: &GameController, pos: &Position) -> Result<(), MoveRejection> {
        GameInProgress::check(game)?;
        CellIsEmpty::check(*pos, game)?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &GameController, after: &GameController) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match ControllerInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let kept = before.cursor() + 1;
        let prefix_kept = after.history().len() == kept + 1
            && after.history().as_slice()[..kept] == before.history().as_slice()[..kept];
        if !prefix_kept {
            warn!(
                before_len = before.history().len(),
                after_len = after.history().len(),
                "History prefix not preserved"
            );
            violations.push(InvariantViolation::new(
                "History keeps every snapshot up to the cursor and appends one",
            ));
        }

        if after.is_rewound() {
            violations.push(InvariantViolation::new("Cursor sits on the newest snapshot"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
