use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{Piece, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::moves::board_move::BoardMove;
use crate::moves::move_shared::push_leaper_moves;

pub fn generate_knight_moves(
    snapshot: &GameSnapshotState,
    piece: Piece,
    from: Position,
    out: &mut Vec<BoardMove>,
) {
    push_leaper_moves(snapshot, piece, from, &KNIGHT_OFFSETS, out);
}
