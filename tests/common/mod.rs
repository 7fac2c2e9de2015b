#![allow(dead_code)]

use chess_core::game_state::chess_types::{PieceKind, Position};
use chess_core::history::game_play_state::GamePlayState;
use chess_core::history::reducer::{reduce, GameAction};
use chess_core::move_generation::legal_move_generator::legal_moves;
use chess_core::utils::algebraic::parse_coordinate_move;

pub fn pos(text: &str) -> Position {
    text.parse().expect("test square should parse")
}

/// Select the origin and move to the destination of a coordinate move such
/// as `"g1f3"`, choosing a queen when a promotion is requested.
pub fn play(state: &GamePlayState, coordinate: &str) -> GamePlayState {
    let mv = parse_coordinate_move(coordinate).expect("coordinate move should parse");
    let selected = reduce(state, GameAction::ToggleSelect(mv.from)).expect("selection never fails");
    assert_eq!(selected.selected(), Some(mv.from), "{coordinate}: origin should be selectable");
    let moved = reduce(&selected, GameAction::MoveTo(mv.to)).expect("move should be legal");
    match moved.pending_promotion() {
        Some(_) => reduce(
            &moved,
            GameAction::PromoteTo(mv.promotion.unwrap_or(PieceKind::Queen)),
        )
        .expect("promotion should apply"),
        None => moved,
    }
}

pub fn play_line(state: &GamePlayState, line: &[&str]) -> GamePlayState {
    line.iter().fold(state.clone(), |acc, coordinate| play(&acc, coordinate))
}

pub fn legal_move_count(state: &GamePlayState) -> usize {
    legal_moves(state.current()).len()
}
