//! Typed move descriptions and their board-mutation semantics.
//!
//! A [`BoardMove`] composes three slots that are applied in order:
//! an optional [`PreMove`] (en passant capture), the [`PrimaryMove`] that
//! relocates the moving piece, and an optional [`Consequence`] (promotion,
//! or the rook shift of a castle). Each slot produces a new [`Board`].

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Position};

/// Anything that turns one board value into another.
pub trait BoardEffect {
    fn apply_to(&self, board: &Board) -> Board;
}

/// Relocation of a single piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMove {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
}

impl BoardEffect for PieceMove {
    fn apply_to(&self, board: &Board) -> Board {
        board.without_piece(self.from).with_piece(self.to, self.piece)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreMove {
    /// Removes a piece that is not standing on the destination square.
    Capture { piece: Piece, position: Position },
}

impl BoardEffect for PreMove {
    fn apply_to(&self, board: &Board) -> Board {
        match self {
            PreMove::Capture { position, .. } => board.without_piece(*position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryMove {
    Move(PieceMove),
    /// King relocation of an O-O; the rook follows as a consequence.
    KingSideCastle(PieceMove),
    /// King relocation of an O-O-O; the rook follows as a consequence.
    QueenSideCastle(PieceMove),
}

impl PrimaryMove {
    #[inline]
    pub fn piece_move(&self) -> &PieceMove {
        match self {
            PrimaryMove::Move(m)
            | PrimaryMove::KingSideCastle(m)
            | PrimaryMove::QueenSideCastle(m) => m,
        }
    }
}

impl BoardEffect for PrimaryMove {
    fn apply_to(&self, board: &Board) -> Board {
        self.piece_move().apply_to(board)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consequence {
    /// Replace whatever stands on `position` with `piece`.
    Promotion { position: Position, piece: Piece },
    /// Secondary relocation, used for the castling rook.
    RookShift(PieceMove),
}

impl BoardEffect for Consequence {
    fn apply_to(&self, board: &Board) -> Board {
        match self {
            Consequence::Promotion { position, piece } => board.with_piece(*position, *piece),
            Consequence::RookShift(m) => m.apply_to(board),
        }
    }
}

/// Which origin coordinates notation must show to identify the moving piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AmbiguityFlags {
    pub file: bool,
    pub rank: bool,
}

impl AmbiguityFlags {
    pub const NONE: Self = Self {
        file: false,
        rank: false,
    };
    pub const FILE: Self = Self {
        file: true,
        rank: false,
    };
    pub const RANK: Self = Self {
        file: false,
        rank: true,
    };
    pub const BOTH: Self = Self {
        file: true,
        rank: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardMove {
    pub primary: PrimaryMove,
    pub pre_move: Option<PreMove>,
    pub consequence: Option<Consequence>,
    pub ambiguity: AmbiguityFlags,
}

impl BoardMove {
    pub fn new(primary: PrimaryMove) -> Self {
        Self {
            primary,
            pre_move: None,
            consequence: None,
            ambiguity: AmbiguityFlags::NONE,
        }
    }

    /// Plain relocation (or capture on the destination square).
    pub fn simple(piece: Piece, from: Position, to: Position) -> Self {
        Self::new(PrimaryMove::Move(PieceMove { piece, from, to }))
    }

    #[must_use]
    pub fn with_pre_move(mut self, pre_move: PreMove) -> Self {
        self.pre_move = Some(pre_move);
        self
    }

    #[must_use]
    pub fn with_consequence(mut self, consequence: Consequence) -> Self {
        self.consequence = Some(consequence);
        self
    }

    #[must_use]
    pub fn with_ambiguity(mut self, ambiguity: AmbiguityFlags) -> Self {
        self.ambiguity = ambiguity;
        self
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.primary.piece_move().piece
    }

    #[inline]
    pub fn from(&self) -> Position {
        self.primary.piece_move().from
    }

    #[inline]
    pub fn to(&self) -> Position {
        self.primary.piece_move().to
    }

    pub fn is_castle(&self) -> bool {
        !matches!(self.primary, PrimaryMove::Move(_))
    }

    pub fn is_en_passant(&self) -> bool {
        self.pre_move.is_some()
    }

    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self.consequence {
            Some(Consequence::Promotion { piece, .. }) => Some(piece.kind),
            _ => None,
        }
    }

    /// The piece this move removes from `board`, if any.
    pub fn captured_piece(&self, board: &Board) -> Option<Piece> {
        if let Some(PreMove::Capture { piece, .. }) = self.pre_move {
            return Some(piece);
        }
        if self.is_castle() {
            return None;
        }
        board
            .piece_at(self.to())
            .filter(|target| target.color != self.piece().color)
    }

    /// Equality of board semantics, ignoring notation-only ambiguity flags.
    pub fn same_effect(&self, other: &BoardMove) -> bool {
        self.primary == other.primary
            && self.pre_move == other.pre_move
            && self.consequence == other.consequence
    }
}

impl BoardEffect for BoardMove {
    fn apply_to(&self, board: &Board) -> Board {
        let board = board.apply(self.pre_move.as_ref());
        let board = self.primary.apply_to(&board);
        board.apply(self.consequence.as_ref())
    }
}

/// Notation-only annotation of an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveEffect {
    Check,
    Checkmate,
    Draw,
}

/// A move as it was actually played, with what it captured and its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppliedMove {
    pub board_move: BoardMove,
    pub captured: Option<Piece>,
    pub effect: Option<MoveEffect>,
}
