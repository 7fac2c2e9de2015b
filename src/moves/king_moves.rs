//! King steps and castling.

use crate::game_state::chess_rules::{
    king_side_castling, queen_side_castling, CastlingSquares, KING_OFFSETS,
};
use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::move_generation::legal_move_checks::is_square_attacked_for_king;
use crate::moves::board_move::{BoardMove, Consequence, PieceMove, PrimaryMove};
use crate::moves::move_shared::push_leaper_moves;

/// With `check_context` set only the eight steps are produced; castling is
/// never a capture and testing it would recurse into check detection.
pub fn generate_king_moves(
    snapshot: &GameSnapshotState,
    piece: Piece,
    from: Position,
    check_context: bool,
    out: &mut Vec<BoardMove>,
) {
    push_leaper_moves(snapshot, piece, from, &KING_OFFSETS, out);

    if check_context || is_square_attacked_for_king(snapshot, piece.color, from) {
        return;
    }

    let rights = snapshot.castling_info.rights(piece.color);
    if rights.king_side_available() {
        let squares = king_side_castling(piece.color);
        if castling_path_clear(snapshot, piece, from, &squares) {
            out.push(castle_move(piece, &squares, PrimaryMove::KingSideCastle));
        }
    }
    if rights.queen_side_available() {
        let squares = queen_side_castling(piece.color);
        if castling_path_clear(snapshot, piece, from, &squares) {
            out.push(castle_move(piece, &squares, PrimaryMove::QueenSideCastle));
        }
    }
}

fn castling_path_clear(
    snapshot: &GameSnapshotState,
    king: Piece,
    from: Position,
    squares: &CastlingSquares,
) -> bool {
    let board = &snapshot.board;
    let rank = squares.king_from.rank() as i8;

    if from != squares.king_from
        || board.piece_at(squares.rook_from) != Some(Piece::new(king.color, PieceKind::Rook))
    {
        return false;
    }

    let between_empty = squares
        .between
        .iter()
        .all(|&file| board.get_at(file as i8, rank).is_some_and(|square| square.is_empty()));
    if !between_empty {
        return false;
    }

    squares.king_path.iter().all(|&file| {
        Position::from_file_rank(file as i8, rank)
            .is_some_and(|square| !is_square_attacked_for_king(snapshot, king.color, square))
    })
}

fn castle_move(
    king: Piece,
    squares: &CastlingSquares,
    primary: fn(PieceMove) -> PrimaryMove,
) -> BoardMove {
    BoardMove::new(primary(PieceMove {
        piece: king,
        from: squares.king_from,
        to: squares.king_to,
    }))
    .with_consequence(Consequence::RookShift(PieceMove {
        piece: Piece::new(king.color, PieceKind::Rook),
        from: squares.rook_from,
        to: squares.rook_to,
    }))
}
