//! Outcome evaluation for a single snapshot.

use super::super::{Outcome, Snapshot};
use super::draw::is_full;
use super::win::check_winner;

/// Classifies a snapshot as won, drawn or still in progress.
///
/// A complete line always wins, even on a full board.
pub fn evaluate(board: &Snapshot) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn board(moves: &[(usize, Mark)]) -> Snapshot {
        moves.iter().fold(Snapshot::empty(), |b, (idx, mark)| {
            b.with_mark(Position::ALL[*idx], *mark)
        })
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Snapshot::empty()), Outcome::InProgress);
    }

    #[test]
    fn test_diagonal_win() {
        let b = board(&[
            (0, Mark::X),
            (1, Mark::O),
            (4, Mark::X),
            (2, Mark::O),
            (8, Mark::X),
        ]);
        assert_eq!(evaluate(&b), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board(&[
            (0, Mark::X),
            (1, Mark::X),
            (5, Mark::X),
            (6, Mark::X),
            (8, Mark::X),
            (2, Mark::O),
            (3, Mark::O),
            (4, Mark::O),
            (7, Mark::O),
        ]);
        assert_eq!(evaluate(&b), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X O X / O X O / O X X: board is full and X holds the main diagonal.
        let b = board(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(evaluate(&b), Outcome::Win(Mark::X));
    }
}
