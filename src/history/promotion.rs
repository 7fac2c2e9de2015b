//! Pawn promotion protocol.
//!
//! `None` -> `Await(square)` once a destination is chosen whose legal
//! completions are all promotions, then `ContinueWith(kind)` once the player
//! picks a piece, and back to `None` when the matching move is applied.

use crate::game_state::chess_types::{PieceKind, Position};
use crate::moves::board_move::BoardMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PromotionState {
    #[default]
    None,
    /// Waiting for the player to pick a piece for the pawn landing on this square.
    Await(Position),
    /// Piece picked; the pending destination is being resolved.
    ContinueWith(PieceKind),
}

impl PromotionState {
    pub fn pending_position(&self) -> Option<Position> {
        match self {
            PromotionState::Await(position) => Some(*position),
            _ => None,
        }
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, PromotionState::Await(_))
    }
}

/// Whether every move in `moves` is a promotion (and there is at least one).
pub fn all_promotions(moves: &[BoardMove]) -> bool {
    !moves.is_empty() && moves.iter().all(|m| m.promotion_kind().is_some())
}

/// The candidate that promotes to `kind`.
pub fn promotion_for(moves: &[BoardMove], kind: PieceKind) -> Option<BoardMove> {
    moves
        .iter()
        .find(|m| m.promotion_kind() == Some(kind))
        .copied()
}
