//! Canonical chess-rule constants.
//!
//! Home squares for kings and rooks, the squares castling moves through,
//! and the knight/king offset tables used by the leaper generators.

use crate::game_state::chess_types::{Color, Position};

pub const E1: Position = Position::new_const(5, 1);
pub const E8: Position = Position::new_const(5, 8);
pub const A1: Position = Position::new_const(1, 1);
pub const H1: Position = Position::new_const(8, 1);
pub const A8: Position = Position::new_const(1, 8);
pub const H8: Position = Position::new_const(8, 8);

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Starting square of the king.
#[inline]
pub const fn king_home(color: Color) -> Position {
    match color {
        Color::White => E1,
        Color::Black => E8,
    }
}

/// Starting square of the king-side (h-file) rook.
#[inline]
pub const fn king_side_rook_home(color: Color) -> Position {
    match color {
        Color::White => H1,
        Color::Black => H8,
    }
}

/// Starting square of the queen-side (a-file) rook.
#[inline]
pub const fn queen_side_rook_home(color: Color) -> Position {
    match color {
        Color::White => A1,
        Color::Black => A8,
    }
}

/// Layout of one castling move on the home rank of `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSquares {
    pub king_from: Position,
    pub king_to: Position,
    pub rook_from: Position,
    pub rook_to: Position,
    /// Squares strictly between king and rook; all must be empty.
    pub between: &'static [u8],
    /// Files the king stands on, crosses, and lands on; none may be attacked.
    pub king_path: [u8; 3],
}

const KING_SIDE_BETWEEN: [u8; 2] = [6, 7];
const QUEEN_SIDE_BETWEEN: [u8; 3] = [2, 3, 4];

pub const fn king_side_castling(color: Color) -> CastlingSquares {
    let rank = color.home_rank();
    CastlingSquares {
        king_from: Position::new_const(5, rank),
        king_to: Position::new_const(7, rank),
        rook_from: Position::new_const(8, rank),
        rook_to: Position::new_const(6, rank),
        between: &KING_SIDE_BETWEEN,
        king_path: [5, 6, 7],
    }
}

pub const fn queen_side_castling(color: Color) -> CastlingSquares {
    let rank = color.home_rank();
    CastlingSquares {
        king_from: Position::new_const(5, rank),
        king_to: Position::new_const(3, rank),
        rook_from: Position::new_const(1, rank),
        rook_to: Position::new_const(4, rank),
        between: &QUEEN_SIDE_BETWEEN,
        king_path: [5, 4, 3],
    }
}
