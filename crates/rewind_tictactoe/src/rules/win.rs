//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Mark, Position, Snapshot};
use tracing::instrument;

/// The eight winning lines, in evaluation order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line and the mark that completed it.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Snapshot) -> Option<(Mark, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Marked(mark) = board.get(a)
            && board.get(b) == Cell::Marked(mark)
            && board.get(c) == Cell::Marked(mark)
        {
            return Some((mark, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Snapshot) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
