use crate::game_state::chess_rules::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::game_state::chess_types::{Piece, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::moves::board_move::BoardMove;
use crate::moves::move_shared::push_slider_moves;

pub fn generate_queen_moves(
    snapshot: &GameSnapshotState,
    piece: Piece,
    from: Position,
    out: &mut Vec<BoardMove>,
) {
    push_slider_moves(snapshot, piece, from, &ORTHOGONAL_DIRECTIONS, out);
    push_slider_moves(snapshot, piece, from, &DIAGONAL_DIRECTIONS, out);
}
