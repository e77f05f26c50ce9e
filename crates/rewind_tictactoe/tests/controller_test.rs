//! Tests for the game controller: moves, outcomes and time travel.

use rewind_tictactoe::{
    Cell, GameController, JumpError, Mark, MoveRejection, MoveResult, Outcome, Position, evaluate,
};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|i| Position::from_index(*i).expect("index 0-8"))
        .collect()
}

fn play(indices: &[usize]) -> GameController {
    GameController::replay(&positions(indices)).expect("valid replay")
}

#[test]
fn test_history_grows_by_one_and_turn_alternates() {
    let mut game = GameController::new();
    let order = positions(&[4, 0, 8, 2, 1, 7, 3, 5, 6]);

    for (n, pos) in order.iter().enumerate() {
        if game.current_outcome().is_terminal() {
            break;
        }
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.current_turn(), expected);

        let len_before = game.history().len();
        let result = game.apply_move(*pos);
        assert_eq!(result.accepted().map(|m| m.mark), Some(expected));
        assert_eq!(game.history().len(), len_before + 1);
        assert_eq!(game.cursor(), len_before);
    }
}

#[test]
fn test_rejection_on_occupied_cell_is_idempotent() {
    let mut game = play(&[0, 4]);

    let first = game.apply_move(Position::Center);
    let after_first = game.clone();
    let second = game.apply_move(Position::Center);

    assert_eq!(first, MoveResult::Ignored(MoveRejection::Occupied(Position::Center)));
    assert_eq!(first, second);
    assert_eq!(game, after_first);
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_rejection_after_terminal_is_idempotent() {
    let mut game = play(&[0, 1, 4, 2, 8]);

    let first = game.apply_move(Position::BottomLeft);
    let after_first = game.clone();
    let second = game.apply_move(Position::BottomLeft);

    assert_eq!(
        first,
        MoveResult::Ignored(MoveRejection::GameOver(Outcome::Win(Mark::X)))
    );
    assert_eq!(first, second);
    assert_eq!(game, after_first);
}

#[test]
fn test_jump_shows_recorded_snapshot_without_touching_history() {
    let mut game = play(&[0, 1, 4, 2]);
    let recorded: Vec<_> = game.history().iter().copied().collect();

    for step in 0..recorded.len() {
        game.jump_to(step).expect("step in range");
        assert_eq!(game.current_snapshot(), &recorded[step]);
        assert_eq!(game.history().len(), recorded.len());
        assert_eq!(game.current_turn(), Mark::for_step(step));
    }
}

#[test]
fn test_jump_out_of_range_fails_loudly() {
    let mut game = play(&[0]);
    assert_eq!(
        game.jump_to(2),
        Err(JumpError::OutOfRange { step: 2, len: 2 })
    );
    assert_eq!(game.cursor(), 1);
    assert_eq!(
        JumpError::OutOfRange { step: 2, len: 2 }.to_string(),
        "Step 2 is out of range (history has 2 entries)"
    );
}

#[test]
fn test_move_after_jump_truncates_then_appends() {
    let mut game = play(&[0, 1, 2, 3, 5, 6]);
    assert_eq!(game.history().len(), 7);

    game.jump_to(3).expect("step in range");
    assert!(game.apply_move(Position::Center).is_accepted());
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.cursor(), 4);
}

#[test]
fn test_diagonal_win() {
    let game = play(&[0, 1, 4, 2, 8]);

    assert_eq!(evaluate(game.current_snapshot()), Outcome::Win(Mark::X));
    assert_eq!(game.current_outcome(), Outcome::Win(Mark::X));
    assert_eq!(
        game.current_winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X: 0, 1, 5, 6, 8   O: 2, 3, 4, 7
    let game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(game.current_outcome(), Outcome::Draw);
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_branch_discards_future() {
    let mut game = play(&[0, 1, 2, 5, 6]);
    assert_eq!(game.history().len(), 6);

    game.jump_to(2).expect("step in range");
    let result = game.apply_move(Position::Center);

    assert_eq!(result.accepted().map(|m| m.mark), Some(Mark::X));
    assert_eq!(game.history().len(), 4);

    let board = game.current_snapshot();
    assert_eq!(board.get(Position::TopLeft), Cell::Marked(Mark::X));
    assert_eq!(board.get(Position::TopCenter), Cell::Marked(Mark::O));
    assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
    // Marks from the discarded future are gone.
    assert!(board.is_empty(Position::TopRight));
    assert!(board.is_empty(Position::MiddleRight));
    assert!(board.is_empty(Position::BottomLeft));
}

#[test]
fn test_move_on_marked_cell_changes_nothing() {
    let mut game = play(&[4]);
    let before = game.clone();

    let result = game.apply_move(Position::Center);

    assert!(!result.is_accepted());
    assert_eq!(game, before);
}

#[test]
fn test_viewing_terminal_then_rewinding_allows_new_branch() {
    let mut game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(game.current_outcome(), Outcome::Draw);

    game.jump_to(8).expect("step in range");
    assert_eq!(game.current_outcome(), Outcome::InProgress);
    assert_eq!(game.valid_moves(), vec![Position::BottomRight]);

    // Viewing history alone keeps the drawn future.
    assert_eq!(game.history().len(), 10);
    game.jump_to(9).expect("step in range");
    assert_eq!(game.current_outcome(), Outcome::Draw);
}

#[test]
fn test_new_controller_resets_state() {
    let game = play(&[0, 1, 4, 2, 8]);
    assert!(game.current_outcome().is_terminal());

    let fresh = GameController::default();
    assert_eq!(fresh.history().len(), 1);
    assert_eq!(fresh.current_outcome(), Outcome::InProgress);
}
