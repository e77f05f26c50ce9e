//! First-class invariants for a game controller.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are testable independently and are checked after each accepted move
//! in debug builds.

use super::{Position, Snapshot};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err listing every
    /// invariant that failed.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Positions whose cells differ between two snapshots.
pub(crate) fn changed_positions(prev: &Snapshot, next: &Snapshot) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| prev.get(*pos) != next.get(*pos))
        .collect()
}

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod no_move_after_terminal;
pub mod single_step;
pub mod starts_empty;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use no_move_after_terminal::NoMoveAfterTerminalInvariant;
pub use single_step::SingleStepInvariant;
pub use starts_empty::StartsEmptyInvariant;

/// Every controller invariant as a composable set.
pub type ControllerInvariants = (
    StartsEmptyInvariant,
    SingleStepInvariant,
    AlternatingMarksInvariant,
    NoMoveAfterTerminalInvariant,
    CursorInBoundsInvariant,
);
