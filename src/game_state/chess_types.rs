//! Fundamental value types shared by every layer of the rules engine.
//!
//! Everything here is `Copy`, immutable, and hashable so boards and
//! snapshots built from these types can be compared and keyed directly.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessErrors;
use crate::utils::algebraic::parse_position;

/// One of the 64 squares, addressed by 1-based file (a = 1) and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Returns `None` when either coordinate falls outside `1..=8`.
    ///
    /// Move generators lean on this to terminate scans at the board edge.
    #[inline]
    pub const fn from_file_rank(file: i8, rank: i8) -> Option<Self> {
        if file < 1 || file > 8 || rank < 1 || rank > 8 {
            None
        } else {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        }
    }

    /// Constructor for rule constants; coordinates must already be in range.
    pub(crate) const fn new_const(file: u8, rank: u8) -> Self {
        assert!(file >= 1 && file <= 8 && rank >= 1 && rank <= 8);
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Zero-based index with a1 = 0, h1 = 7, h8 = 63.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::from_file_rank(self.file as i8 + d_file, self.rank as i8 + d_rank)
    }

    /// a1 is a dark square.
    #[inline]
    pub const fn is_light_square(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file - 1)
    }

    /// Rank digit, `'1'..='8'`.
    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'0' + self.rank)
    }

    /// All squares, rank by rank from a1 to h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|rank| (1..=8u8).map(move |file| Position { file, rank }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Position {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s)
    }
}

/// Side to move, or the owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the pieces (other than pawns) start on.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// The rank a pawn of this color must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 5,
            Color::Black => 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

/// Piece kind; color is carried separately in [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices, in the order the pawn generator expands them.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Letter used in algebraic notation; pawns have none.
    #[inline]
    pub const fn san_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    /// Parses the lowercase coordinate-notation promotion suffix (`q`, `r`, `b`, `n`).
    pub fn from_promotion_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }
}

/// An immutable piece value. Promotion replaces the value on a square, it
/// never mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color.index() == color.index() && self.kind.index() == kind.index()
    }
}
