#![cfg(feature = "serde")]

use chess_rules::{initial_state, Color, GamePhase, GameState, MoveOutcome, Position};

fn sq(name: &str) -> Position {
    name.parse().unwrap()
}

#[test]
fn game_state_survives_json() {
    let mut game = initial_state();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "e5"), ("f7", "f5")] {
        assert!(game.try_play_move(sq(from), sq(to)).is_accepted());
    }

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);

    // The restored game still knows f7-f5 was a double step.
    assert!(restored.legal_moves(sq("e5")).contains(sq("f6")));
    assert!(restored.try_play_move(sq("e5"), sq("f6")).is_accepted());
    assert!(restored.piece_at(sq("f5")).is_empty());
}

#[test]
fn short_board_is_rejected() {
    let game = initial_state();
    let mut value = serde_json::to_value(&game).unwrap();
    value["board"]["cells"].as_array_mut().unwrap().pop();
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("64 cells"));
}

fn in_check() -> GameState {
    let mut game = initial_state();
    for (from, to) in [("e2", "e4"), ("f7", "f6"), ("d1", "h5")] {
        assert!(game.try_play_move(sq(from), sq(to)).is_accepted());
    }
    game
}

#[test]
fn kingless_board_is_rejected() {
    let mut value = serde_json::to_value(initial_state()).unwrap();
    // e8
    value["board"]["cells"][4] = serde_json::json!("Empty");
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("exactly one king"), "{err}");
}

#[test]
fn capturable_king_is_rejected() {
    let mut value = serde_json::to_value(in_check()).unwrap();
    value["side_to_move"] = serde_json::json!("White");
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("Black is in check"), "{err}");
}

#[test]
fn stored_phase_is_recomputed() {
    let game = in_check();
    let mut value = serde_json::to_value(&game).unwrap();
    value["phase"] = serde_json::json!({ "Ongoing": "Black" });
    let restored: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(restored.phase(), GamePhase::Check(Color::Black));
    assert_eq!(restored, game);
}

#[test]
fn outcome_serializes_flat() {
    let mut game = initial_state();
    let outcome = game.try_play_move(sq("g1"), sq("f3"));
    let value = serde_json::to_value(outcome).unwrap();
    assert_eq!(value["rejected_self_check"], false);
    assert_eq!(value["status"], "NoChecks");
    let back: MoveOutcome = serde_json::from_value(value).unwrap();
    assert_eq!(back, outcome);
}
