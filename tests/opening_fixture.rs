mod common;

use chess_core::game_state::chess_types::Color;
use chess_core::game_state::game_snapshot::{GameSnapshotState, Resolution};
use chess_core::history::game_play_state::GamePlayState;
use chess_core::move_generation::legal_move_checks::is_king_in_check;
use chess_core::move_generation::legal_move_generator::legal_moves;
use chess_core::move_generation::perft::perft;

use common::{legal_move_count, play};

#[test]
fn starting_position_has_twenty_moves() {
    let state = GamePlayState::default();
    assert_eq!(legal_move_count(&state), 20);
    assert_eq!(state.to_move(), Color::White);
}

#[test]
fn open_game_reproduces_known_move_counts() {
    let mut state = GamePlayState::default();
    let expected = [("e2e4", 20), ("e7e5", 29), ("g1f3", 29), ("b8c6", 27)];

    for (coordinate, count_after) in expected {
        state = play(&state, coordinate);
        assert_eq!(
            legal_move_count(&state),
            count_after,
            "legal moves after {coordinate}"
        );
        assert_eq!(state.resolution(), Resolution::InProgress);
    }
    assert_eq!(state.transcript(), "1. e4 e5 2. Nf3 Nc6");
}

#[test]
fn perft_matches_reference_counts() {
    let snapshot = GameSnapshotState::new();
    assert_eq!(perft(&snapshot, 1), 20);
    assert_eq!(perft(&snapshot, 2), 400);
    assert_eq!(perft(&snapshot, 3), 8902);
}

#[test]
fn no_legal_move_leaves_the_mover_in_check() {
    let start = GameSnapshotState::new();
    for first in legal_moves(&start) {
        let after_first = start.derive(&first);
        assert!(!is_king_in_check(&after_first, Color::White));
        for second in legal_moves(&after_first) {
            let after_second = after_first.derive(&second);
            assert!(!is_king_in_check(&after_second, Color::Black));
        }
    }
}

#[test]
fn legal_moves_are_stable_across_calls() {
    let state = play(&play(&GamePlayState::default(), "d2d4"), "d7d5");
    assert_eq!(legal_moves(state.current()), legal_moves(state.current()));
}
