//! Legal move generation.
//!
//! Pseudo-legal moves are simulated one by one on a derived snapshot and
//! discarded when they leave the mover's own king attacked.

use crate::game_state::chess_types::{Color, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::move_generation::legal_move_checks::has_check_for;
use crate::moves::board_move::BoardMove;
use crate::moves::piece_moves::pseudo_legal_moves;

/// Seam for anything that can list the legal moves of a snapshot.
pub trait MoveGenerator {
    fn legal_moves(&self, snapshot: &GameSnapshotState) -> Vec<BoardMove>;
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn legal_moves(&self, snapshot: &GameSnapshotState) -> Vec<BoardMove> {
        legal_moves(snapshot)
    }
}

/// Legal moves of the piece on `position`, whatever its color.
pub fn legal_moves_from(snapshot: &GameSnapshotState, position: Position) -> Vec<BoardMove> {
    pseudo_legal_moves(snapshot, position, false)
        .into_iter()
        .filter(|m| !leaves_own_king_in_check(snapshot, m))
        .collect()
}

/// All legal moves of the side to move.
pub fn legal_moves(snapshot: &GameSnapshotState) -> Vec<BoardMove> {
    snapshot
        .board
        .occupied()
        .filter(|square| square.has_color(snapshot.to_move))
        .flat_map(|square| legal_moves_from(snapshot, square.position))
        .collect()
}

/// Squares of `color` holding a piece with at least one legal move.
pub fn movable_positions(snapshot: &GameSnapshotState, color: Color) -> Vec<Position> {
    snapshot
        .board
        .occupied()
        .filter(|square| square.has_color(color))
        .map(|square| square.position)
        .filter(|position| !legal_moves_from(snapshot, *position).is_empty())
        .collect()
}

pub fn has_any_legal_move(snapshot: &GameSnapshotState, color: Color) -> bool {
    snapshot
        .board
        .occupied()
        .filter(|square| square.has_color(color))
        .any(|square| !legal_moves_from(snapshot, square.position).is_empty())
}

fn leaves_own_king_in_check(snapshot: &GameSnapshotState, board_move: &BoardMove) -> bool {
    let derived = snapshot.derive(board_move);
    match derived.king_position(board_move.piece().color) {
        Some(king) => has_check_for(&derived, king),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::move_generation::legal_move_checks::is_king_in_check;

    fn pos(text: &str) -> Position {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let snapshot = GameSnapshotState::new();
        let moves = LegalMoveGenerator.legal_moves(&snapshot);
        assert_eq!(moves.len(), 20);
        let knight_moves = moves
            .iter()
            .filter(|m| m.piece().kind == PieceKind::Knight)
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let board = Board::empty()
            .with_piece(pos("e1"), Piece::new(Color::White, PieceKind::King))
            .with_piece(pos("e2"), Piece::new(Color::White, PieceKind::Knight))
            .with_piece(pos("e8"), Piece::new(Color::Black, PieceKind::Rook))
            .with_piece(pos("a8"), Piece::new(Color::Black, PieceKind::King));
        let snapshot = GameSnapshotState::from_board(board, Color::White);

        assert!(legal_moves_from(&snapshot, pos("e2")).is_empty());
        for m in legal_moves(&snapshot) {
            assert!(!is_king_in_check(&snapshot.derive(&m), Color::White));
        }
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = Board::empty()
            .with_piece(pos("e1"), Piece::new(Color::White, PieceKind::King))
            .with_piece(pos("d8"), Piece::new(Color::Black, PieceKind::Rook))
            .with_piece(pos("f8"), Piece::new(Color::Black, PieceKind::Rook))
            .with_piece(pos("a8"), Piece::new(Color::Black, PieceKind::King));
        let snapshot = GameSnapshotState::from_board(board, Color::White);

        let targets: Vec<Position> = legal_moves_from(&snapshot, pos("e1"))
            .iter()
            .map(BoardMove::to)
            .collect();
        assert_eq!(targets, vec![pos("e2")]);
    }

    #[test]
    fn regenerating_is_pure() {
        let snapshot = GameSnapshotState::new();
        assert_eq!(legal_moves(&snapshot), legal_moves(&snapshot));
    }
}
