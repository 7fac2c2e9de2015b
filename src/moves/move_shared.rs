//! Scanning helpers shared by the per-piece generators.

use crate::game_state::chess_types::{Piece, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::moves::board_move::BoardMove;

/// One step per offset; destinations held by the mover's own color are skipped.
pub fn push_leaper_moves(
    snapshot: &GameSnapshotState,
    piece: Piece,
    from: Position,
    offsets: &[(i8, i8)],
    out: &mut Vec<BoardMove>,
) {
    for &(d_file, d_rank) in offsets {
        let Some(target) = snapshot
            .board
            .get_at(from.file() as i8 + d_file, from.rank() as i8 + d_rank)
        else {
            continue;
        };
        if !target.has_color(piece.color) {
            out.push(BoardMove::simple(piece, from, target.position));
        }
    }
}

/// Rays of up to seven steps. A ray stops at the board edge, before a
/// friendly piece, or right after capturing an enemy piece.
pub fn push_slider_moves(
    snapshot: &GameSnapshotState,
    piece: Piece,
    from: Position,
    directions: &[(i8, i8)],
    out: &mut Vec<BoardMove>,
) {
    for &(d_file, d_rank) in directions {
        for step in 1..=7i8 {
            let Some(target) = snapshot.board.get_at(
                from.file() as i8 + d_file * step,
                from.rank() as i8 + d_rank * step,
            ) else {
                break;
            };

            match target.piece {
                None => out.push(BoardMove::simple(piece, from, target.position)),
                Some(occupant) if occupant.color != piece.color => {
                    out.push(BoardMove::simple(piece, from, target.position));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
