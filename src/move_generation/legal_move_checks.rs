//! Check detection.
//!
//! [`has_check_for`] scans the pieces of the side to move in the snapshot it
//! is given. It is meant to be called on a derived snapshot where the turn has
//! already passed to the attacker, so "pieces to move" are the attackers of
//! the king being tested. Calling it on the pre-move snapshot inverts the
//! roles of attacker and defender.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::moves::piece_moves::pseudo_legal_moves;

/// True iff some piece of `snapshot.to_move` has a capture-type move onto `position`.
pub fn has_check_for(snapshot: &GameSnapshotState, position: Position) -> bool {
    snapshot
        .board
        .occupied()
        .filter(|square| square.has_color(snapshot.to_move))
        .any(|square| {
            pseudo_legal_moves(snapshot, square.position, true)
                .iter()
                .any(|m| m.to() == position)
        })
}

#[inline]
pub fn king_square(snapshot: &GameSnapshotState, color: Color) -> Option<Position> {
    snapshot.king_position(color)
}

/// Whether the king of `color` is attacked. A side with no king is never in check.
pub fn is_king_in_check(snapshot: &GameSnapshotState, color: Color) -> bool {
    let Some(king) = king_square(snapshot, color) else {
        return false;
    };
    has_check_for(&snapshot.with_to_move(color.opposite()), king)
}

/// Whether the king of `color` would be attacked standing on `square`.
///
/// The king is lifted from its current square and placed on `square` before
/// testing, so pawn diagonals and rays through the vacated square count.
pub fn is_square_attacked_for_king(
    snapshot: &GameSnapshotState,
    color: Color,
    square: Position,
) -> bool {
    let king = Piece::new(color, PieceKind::King);
    let board = match king_square(snapshot, color) {
        Some(current) => snapshot.board.without_piece(current),
        None => snapshot.board,
    }
    .with_piece(square, king);

    let probe = GameSnapshotState {
        board,
        to_move: color.opposite(),
        ..snapshot.clone()
    };
    has_check_for(&probe, square)
}
