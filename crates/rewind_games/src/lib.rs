//! Terminal front-end for rewind tic-tac-toe.
//!
//! Play interactively with [`tui::run_tui`], or replay a move list
//! headlessly with [`replay::run_replay`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod logging;
pub mod replay;
pub mod status;
pub mod tui;

pub use config::{ConfigError, GameConfig};
pub use status::StatusLine;
