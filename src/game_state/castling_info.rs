//! "Has it moved" tracking for kings and corner rooks.
//!
//! The flags only record whether the king or an original corner rook ever
//! left its square. A rook captured on its corner leaves its flag untouched;
//! castling generation separately checks that a rook still stands on the
//! corner, which covers that case.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, king_side_rook_home, queen_side_rook_home};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::moves::board_move::BoardMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub king_moved: bool,
    pub king_side_rook_moved: bool,
    pub queen_side_rook_moved: bool,
}

impl CastlingRights {
    #[inline]
    pub fn king_side_available(&self) -> bool {
        !self.king_moved && !self.king_side_rook_moved
    }

    #[inline]
    pub fn queen_side_available(&self) -> bool {
        !self.king_moved && !self.queen_side_rook_moved
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingInfo {
    pub white: CastlingRights,
    pub black: CastlingRights,
}

impl CastlingInfo {
    /// Every piece counts as unmoved.
    pub const fn all_available() -> Self {
        let unmoved = CastlingRights {
            king_moved: false,
            king_side_rook_moved: false,
            queen_side_rook_moved: false,
        };
        Self {
            white: unmoved,
            black: unmoved,
        }
    }

    /// A piece missing from its home square counts as having moved.
    pub fn from_board(board: &Board) -> Self {
        let rights_for = |color: Color| {
            let rook = Piece::new(color, PieceKind::Rook);
            CastlingRights {
                king_moved: board.piece_at(king_home(color))
                    != Some(Piece::new(color, PieceKind::King)),
                king_side_rook_moved: board.piece_at(king_side_rook_home(color)) != Some(rook),
                queen_side_rook_moved: board.piece_at(queen_side_rook_home(color)) != Some(rook),
            }
        };
        Self {
            white: rights_for(Color::White),
            black: rights_for(Color::Black),
        }
    }

    #[inline]
    pub fn rights(&self, color: Color) -> CastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[must_use]
    pub fn with_rights(&self, color: Color, rights: CastlingRights) -> Self {
        let mut next = *self;
        match color {
            Color::White => next.white = rights,
            Color::Black => next.black = rights,
        }
        next
    }

    /// Flags after `board_move` has been played.
    #[must_use]
    pub fn after_move(&self, board_move: &BoardMove) -> Self {
        let piece = board_move.piece();
        let from = board_move.from();
        let mut rights = self.rights(piece.color);

        match piece.kind {
            PieceKind::King => rights.king_moved = true,
            PieceKind::Rook if from == king_side_rook_home(piece.color) => {
                rights.king_side_rook_moved = true
            }
            PieceKind::Rook if from == queen_side_rook_home(piece.color) => {
                rights.queen_side_rook_moved = true
            }
            _ => return *self,
        }

        self.with_rights(piece.color, rights)
    }
}
