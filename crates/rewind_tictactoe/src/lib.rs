//! Tic-tac-toe game logic with history time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a single [`Snapshot`] ([`evaluate`])
//! - **Controller**: [`GameController`] owns every snapshot the game has
//!   passed through plus a view cursor, applies moves and jumps
//! - **Invariants and contracts**: properties every controller satisfies,
//!   checked after each accepted move in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, Mark, Outcome, Position};
//!
//! let mut game = GameController::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! assert_eq!(game.current_turn(), Mark::X);
//!
//! // Look back at the opening move, then branch from it.
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.current_outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod error;
mod history;
mod move_list;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveRejection, MoveResult};
pub use contracts::{CellIsEmpty, Contract, GameInProgress, MoveContract};
pub use controller::GameController;
pub use error::{JumpError, PositionParseError, ReplayError};
pub use history::History;
pub use invariants::{ControllerInvariants, Invariant, InvariantSet, InvariantViolation};
pub use move_list::{MoveEntry, MoveLabel, MoveList, MoveListIter};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate;
pub use types::{Cell, Mark, Snapshot};
