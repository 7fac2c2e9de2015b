//! Single dispatch point from a piece kind to its pseudo-legal generator.

use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::board_move::BoardMove;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Moves allowed by the movement pattern of the piece on `from` and by board
/// occupancy, without regard to the mover's own king. Empty for an empty square.
///
/// `check_context` asks only "what could this piece capture" and turns off
/// castling generation.
pub fn pseudo_legal_moves(
    snapshot: &GameSnapshotState,
    from: Position,
    check_context: bool,
) -> Vec<BoardMove> {
    let mut out = Vec::new();
    let Some(piece) = snapshot.board.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(snapshot, piece, from, &mut out),
        PieceKind::Knight => generate_knight_moves(snapshot, piece, from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(snapshot, piece, from, &mut out),
        PieceKind::Rook => generate_rook_moves(snapshot, piece, from, &mut out),
        PieceKind::Queen => generate_queen_moves(snapshot, piece, from, &mut out),
        PieceKind::King => generate_king_moves(snapshot, piece, from, check_context, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::game_snapshot::GameSnapshotState;

    #[test]
    fn empty_square_has_no_moves() {
        let snapshot = GameSnapshotState::new();
        let e4 = "e4".parse().expect("e4 should parse");
        assert!(pseudo_legal_moves(&snapshot, e4, false).is_empty());
    }

    #[test]
    fn start_position_pseudo_moves_match_legal_count() {
        let snapshot = GameSnapshotState::new();
        let total: usize = snapshot
            .board
            .occupied()
            .filter(|square| square.has_color(snapshot.to_move))
            .map(|square| pseudo_legal_moves(&snapshot, square.position, false).len())
            .sum();
        assert_eq!(total, 20);
    }
}
