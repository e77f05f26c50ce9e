//! Tests for the JSON shape handed to front-ends.

use rewind_tictactoe::{GameController, Position};
use serde_json::json;

#[test]
fn test_controller_serializes_history_and_cursor() {
    let mut game = GameController::replay(&[Position::Center]).expect("valid replay");
    game.jump_to(0).expect("step in range");

    let value = serde_json::to_value(&game).expect("serializable");

    assert_eq!(value["cursor"], json!(0));
    let history = value["history"].as_array().expect("history is an array");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["cells"][4], json!("Empty"));
    assert_eq!(history[1]["cells"][4], json!({ "Marked": "X" }));
}

#[test]
fn test_move_list_serializes_labels() {
    let game = GameController::replay(&[Position::Center, Position::TopLeft])
        .expect("valid replay");

    let entries: Vec<_> = game.move_list().iter().collect();
    let value = serde_json::to_value(&entries).expect("serializable");

    assert_eq!(value[0]["label"], json!("GameStart"));
    assert_eq!(value[2]["label"], json!({ "Move": 2 }));
    assert_eq!(value[2]["is_current"], json!(true));
}
