//! Draw detection logic for tic-tac-toe.

use super::super::{Cell, Snapshot};

/// Checks if the board is full (all cells marked).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Snapshot) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Snapshot) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Snapshot::empty()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Snapshot::empty().with_mark(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X X O / O O X / X O X
        let board = [
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::O),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::MiddleRight, Mark::X),
            (Position::BottomLeft, Mark::X),
            (Position::BottomCenter, Mark::O),
            (Position::BottomRight, Mark::X),
        ]
        .into_iter()
        .fold(Snapshot::empty(), |b, (pos, mark)| b.with_mark(pos, mark));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Position::ALL
            .iter()
            .fold(Snapshot::empty(), |b, pos| b.with_mark(*pos, Mark::X));

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
