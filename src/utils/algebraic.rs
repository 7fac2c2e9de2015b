//! Coordinate notation parsing.
//!
//! Converts human-readable squares (`e4`) and coordinate moves (`e2e4`,
//! `e7e8q`) into engine types. Full SAN parsing is not supported.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PieceKind, Position};

/// Parse a square such as `"e4"`.
#[inline]
pub fn parse_position(square: &str) -> ChessResult<Position> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidFileOrRank {
            file: char::from(file),
            rank: char::from(rank),
        });
    }

    Position::from_file_rank((file - b'a' + 1) as i8, (rank - b'0') as i8)
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

/// A from/to pair with an optional promotion piece, as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

/// Parse a coordinate move such as `"e2e4"` or `"e7e8q"`.
pub fn parse_coordinate_move(text: &str) -> ChessResult<CoordinateMove> {
    let text = text.trim();
    if !text.is_ascii() || !(text.len() == 4 || text.len() == 5) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let from = parse_position(&text[0..2])?;
    let to = parse_position(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => Some(
            PieceKind::from_promotion_char(c)
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(text.to_owned()))?,
        ),
    };

    Ok(CoordinateMove {
        from,
        to,
        promotion,
    })
}
