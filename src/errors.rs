//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the legality engine,
//! the history reducer and the coordinate parsers. Two families exist:
//!
//! - Contract violations (`IllegalMove`, `NoPieceAt`, `NoSelection`,
//!   `NotAwaitingPromotion`, `NoPromotionCandidate`,
//!   `HistoryIndexOutOfBounds`): the caller issued an intent the query
//!   surface never offered. Nothing is applied when one of these is
//!   returned, so the caller's previous state is still valid.
//! - Input errors (`InvalidAlgebraicString`, `InvalidFileOrRank`): text
//!   typed by a user did not name a square or move.
//!
//! Boundary conditions such as stepping past the end of history or clicking
//! an empty square are not errors and never produce one of these.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Position};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// No legal move leads from `from` to `to` in the current snapshot.
    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// A move was requested from an empty square.
    #[error("no piece at {0}")]
    NoPieceAt(Position),

    /// A destination was chosen while no square was selected.
    #[error("no square is selected")]
    NoSelection,

    /// A promotion piece was chosen while no promotion was pending.
    #[error("promotion piece chosen while no promotion is pending")]
    NotAwaitingPromotion,

    /// None of the pending legal moves promotes to the chosen kind.
    #[error("no promotion to {kind:?} is available on {to}")]
    NoPromotionCandidate { to: Position, kind: PieceKind },

    /// A non-clamped history lookup addressed a missing snapshot.
    #[error("history index {index} is out of bounds for {len} snapshots")]
    HistoryIndexOutOfBounds { index: usize, len: usize },

    /// Text could not be interpreted as a square or coordinate move.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// A square used a file outside `a..=h` or a rank outside `1..=8`.
    #[error("invalid file or rank: {file}{rank}")]
    InvalidFileOrRank { file: char, rank: char },
}

/// Result alias for rules-engine operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
