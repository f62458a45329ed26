use crate::game_repr::{Action, GameState, Isolation, PlayerId};
use super::{cell, placed};

// ==================== TERMINAL AND UTILITY TESTS ====================

#[test]
fn test_new_game_is_not_terminal() {
    let state = Isolation::new();

    assert!(!state.terminal_test());
    assert_eq!(state.utility(PlayerId::First), 0.0);
}

#[test]
fn test_stuck_player_to_move_loses() {
    // First player in the corner with both jumps blocked
    let state = placed(0, cell(4, 5)).with_blocked(&[15, 27]);

    assert_eq!(state.player(), PlayerId::First);
    assert!(state.terminal_test());
    assert!(state.actions().is_empty());
    assert_eq!(state.utility(PlayerId::First), f64::NEG_INFINITY);
    assert_eq!(state.utility(PlayerId::Second), f64::INFINITY);
}

#[test]
fn test_stuck_opponent_loses() {
    // Second player is stuck while the first player still has moves
    let state = placed(cell(4, 5), 0).with_blocked(&[15, 27]);

    assert_eq!(state.player(), PlayerId::First);
    assert!(state.terminal_test());
    assert_eq!(state.utility(PlayerId::First), f64::INFINITY);
    assert_eq!(state.utility(PlayerId::Second), f64::NEG_INFINITY);
}

#[test]
fn test_unplaced_player_always_has_liberties() {
    let state = Isolation::new().result(Action::Place(cell(4, 5)));

    assert!(!state.terminal_test());
}
