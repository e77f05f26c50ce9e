//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Snapshot`](crate::Snapshot). Rules never
//! look at history; the controller asks them about whichever snapshot it is
//! currently viewing.

pub mod draw;
pub mod evaluate;
pub mod win;

pub use draw::is_full;
pub use evaluate::evaluate;
pub use win::{LINES, check_winner, winning_line};
