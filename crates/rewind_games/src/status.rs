//! Status text for the viewed snapshot.

use rewind_tictactoe::{GameController, Mark, Outcome};

/// One-line game status shown under the board.
///
/// A won snapshot always reads "Winner", never "Next player".
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StatusLine {
    /// The viewed snapshot is won.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// The viewed snapshot accepts a move from this mark.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
    /// The viewed snapshot is drawn.
    #[display("Draw")]
    Draw,
}

impl StatusLine {
    /// Status for the controller's viewed snapshot.
    pub fn for_game(game: &GameController) -> Self {
        match game.current_outcome() {
            Outcome::Win(mark) => StatusLine::Winner(mark),
            Outcome::Draw => StatusLine::Draw,
            Outcome::InProgress => StatusLine::NextPlayer(game.current_turn()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Position;

    #[test]
    fn test_new_game_next_player_x() {
        let game = GameController::new();
        assert_eq!(StatusLine::for_game(&game).to_string(), "Next player: X");
    }

    #[test]
    fn test_winner_label() {
        let game = GameController::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ])
        .expect("valid replay");
        assert_eq!(StatusLine::for_game(&game).to_string(), "Winner: X");
    }

    #[test]
    fn test_status_follows_cursor() {
        let mut game = GameController::replay(&[Position::Center, Position::TopLeft])
            .expect("valid replay");
        game.jump_to(1).expect("step in range");
        assert_eq!(StatusLine::for_game(&game), StatusLine::NextPlayer(Mark::O));
    }
}
