//! Zobrist keys for the repetition-relevant part of a snapshot.
//!
//! The key covers piece placement, side to move, and the six castling flags.
//! En passant availability and move counters are not hashed, so
//! positions differing only in those count as the same position.
//!
//! Keys are drawn once from a fixed-seed `StdRng`, so hashes are
//! deterministic across runs.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::castling_info::{CastlingInfo, CastlingRights};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::game_snapshot::GameSnapshotState;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    castling: [u64; 64],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for key in piece {
                *key = rng.random::<u64>();
            }
        }
    }

    let black_to_move = rng.random::<u64>();

    let mut castling = [0u64; 64];
    for key in castling.iter_mut().skip(1) {
        *key = rng.random::<u64>();
    }

    ZobristTables {
        piece_square,
        black_to_move,
        castling,
    }
}

#[inline]
pub fn piece_square_key(color: Color, kind: PieceKind, position: Position) -> u64 {
    tables().piece_square[color.index()][kind.index()][position.index()]
}

/// Six castling flags packed as white (king, king side, queen side) then black.
pub fn castling_mask(info: &CastlingInfo) -> usize {
    let bits = |rights: CastlingRights| {
        usize::from(rights.king_moved)
            | usize::from(rights.king_side_rook_moved) << 1
            | usize::from(rights.queen_side_rook_moved) << 2
    };
    bits(info.white) | bits(info.black) << 3
}

#[inline]
pub fn castling_key(info: &CastlingInfo) -> u64 {
    tables().castling[castling_mask(info)]
}

/// Hash of board, side to move, and castling flags.
pub fn repetition_hash(snapshot: &GameSnapshotState) -> u64 {
    let mut hash = snapshot.board.occupied().fold(0u64, |acc, square| match square.piece {
        Some(piece) => acc ^ piece_square_key(piece.color, piece.kind, square.position),
        None => acc,
    });

    if snapshot.to_move == Color::Black {
        hash ^= tables().black_to_move;
    }
    hash ^ castling_key(&snapshot.castling_info)
}
