//! Terminal-oriented Unicode board renderer.
//!
//! Used by the terminal host and in debug logs.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

/// Render the board with rank 8 on top, framed by file letters and rank digits.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (1..=8u8).rev() {
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for file in 1..=8u8 {
            let position = Position::new_const(file, rank);
            match board.piece_at(position) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
