//! Origin hints for algebraic notation.

use crate::game_state::chess_types::Position;
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::moves::board_move::{AmbiguityFlags, BoardMove};
use crate::moves::piece_moves::pseudo_legal_moves;

/// Flags needed to tell `board_move` apart from moves of other pieces of the
/// same kind and color that reach the same destination.
///
/// File wins when restricting the candidates to the origin's file leaves a
/// single piece; rank wins when restricting to the origin's rank does;
/// otherwise the full origin square is required.
pub fn ambiguity_for(snapshot: &GameSnapshotState, board_move: &BoardMove) -> AmbiguityFlags {
    let origins = candidate_origins(snapshot, board_move);
    if origins.len() <= 1 {
        return AmbiguityFlags::NONE;
    }

    let from = board_move.from();
    let same_file = origins.iter().filter(|p| p.file() == from.file()).count();
    if same_file == 1 {
        return AmbiguityFlags::FILE;
    }
    let same_rank = origins.iter().filter(|p| p.rank() == from.rank()).count();
    if same_rank == 1 {
        return AmbiguityFlags::RANK;
    }
    AmbiguityFlags::BOTH
}

/// Squares holding a piece like the mover's whose pseudo-legal moves reach
/// the destination, the mover's own square included.
fn candidate_origins(snapshot: &GameSnapshotState, board_move: &BoardMove) -> Vec<Position> {
    let piece = board_move.piece();
    let to = board_move.to();
    snapshot
        .board
        .find_by_kind_and_color(piece.kind, piece.color)
        .into_iter()
        .map(|square| square.position)
        .filter(|origin| {
            *origin == board_move.from()
                || pseudo_legal_moves(snapshot, *origin, false)
                    .iter()
                    .any(|m| m.to() == to)
        })
        .collect()
}
