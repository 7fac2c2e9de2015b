//! Immutable 8x8 board.
//!
//! Square index layout follows [`Position::index`]: a1 = 0, h1 = 7,
//! a2 = 8, h8 = 63. Every editing operation returns a new `Board`.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::moves::board_move::BoardEffect;

/// Occupancy of one square as seen through a board lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub position: Position,
    pub piece: Option<Piece>,
}

impl Square {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline]
    pub fn has_color(&self, color: Color) -> bool {
        self.piece.is_some_and(|piece| piece.color == color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    /// Standard starting position.
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (file_idx, kind) in BACK_RANK.iter().enumerate() {
                let file = file_idx as u8 + 1;
                board.squares[Position::new_const(file, color.home_rank()).index()] =
                    Some(Piece::new(color, *kind));
                board.squares[Position::new_const(file, color.pawn_start_rank()).index()] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Copy of this board with `piece` placed on `position`, replacing any occupant.
    #[must_use]
    pub fn with_piece(&self, position: Position, piece: Piece) -> Self {
        let mut next = *self;
        next.squares[position.index()] = Some(piece);
        next
    }

    /// Copy of this board with `position` emptied.
    #[must_use]
    pub fn without_piece(&self, position: Position) -> Self {
        let mut next = *self;
        next.squares[position.index()] = None;
        next
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.index()]
    }

    /// Total lookup over the 64 squares.
    #[inline]
    pub fn get(&self, position: Position) -> Square {
        Square {
            position,
            piece: self.piece_at(position),
        }
    }

    /// Bounds-checked lookup; `None` for coordinates off the board.
    #[inline]
    pub fn get_at(&self, file: i8, rank: i8) -> Option<Square> {
        Position::from_file_rank(file, rank).map(|position| self.get(position))
    }

    /// First square (a1 to h8 order) holding exactly `piece`.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        self.occupied().find(|square| square.piece == Some(piece))
    }

    pub fn find_by_kind_and_color(&self, kind: PieceKind, color: Color) -> Vec<Square> {
        self.occupied()
            .filter(|square| square.piece == Some(Piece::new(color, kind)))
            .collect()
    }

    /// Occupied squares, a1 to h8.
    pub fn occupied(&self) -> impl Iterator<Item = Square> + '_ {
        Position::all()
            .map(|position| self.get(position))
            .filter(|square| !square.is_empty())
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Apply an effect, or return the same board when there is none.
    #[must_use]
    pub fn apply<E: BoardEffect + ?Sized>(&self, effect: Option<&E>) -> Self {
        match effect {
            Some(effect) => effect.apply_to(self),
            None => *self,
        }
    }
}
