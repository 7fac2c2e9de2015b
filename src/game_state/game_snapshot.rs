//! The atomic, immutable unit of game state.

use crate::game_state::board::Board;
use crate::game_state::castling_info::CastlingInfo;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::moves::board_move::{AppliedMove, BoardEffect, BoardMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    #[default]
    InProgress,
    Checkmate,
    Stalemate,
    DrawByRepetition,
    InsufficientMaterial,
}

impl Resolution {
    /// Every resolution except `InProgress` ends the game.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Resolution::InProgress
    }

    #[inline]
    pub fn is_draw(self) -> bool {
        matches!(
            self,
            Resolution::Stalemate | Resolution::DrawByRepetition | Resolution::InsufficientMaterial
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshotState {
    pub board: Board,
    pub to_move: Color,
    pub resolution: Resolution,
    /// Move chosen from this snapshot; only set on the `from` side of a transition.
    pub decided_move: Option<AppliedMove>,
    /// Move that produced this snapshot.
    pub last_move: Option<AppliedMove>,
    pub castling_info: CastlingInfo,
    pub captured_pieces: Vec<Piece>,
}

impl Default for GameSnapshotState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSnapshotState {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// Arbitrary position; castling flags are derived from piece placement.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            resolution: Resolution::InProgress,
            decided_move: None,
            last_move: None,
            castling_info: CastlingInfo::from_board(&board),
            captured_pieces: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_castling_info(mut self, castling_info: CastlingInfo) -> Self {
        self.castling_info = castling_info;
        self
    }

    #[must_use]
    pub fn with_last_move(mut self, last_move: Option<AppliedMove>) -> Self {
        self.last_move = last_move;
        self
    }

    /// Same position with a different side to move.
    #[must_use]
    pub fn with_to_move(&self, to_move: Color) -> Self {
        Self {
            to_move,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_decided_move(&self, decided_move: AppliedMove) -> Self {
        Self {
            decided_move: Some(decided_move),
            ..self.clone()
        }
    }

    /// Board after `board_move` with the turn passed to the opponent of the
    /// mover. Resolution is left `InProgress`; classification happens in the
    /// legality engine.
    pub fn derive(&self, board_move: &BoardMove) -> Self {
        let captured = board_move.captured_piece(&self.board);
        let mut captured_pieces = self.captured_pieces.clone();
        captured_pieces.extend(captured);

        Self {
            board: board_move.apply_to(&self.board),
            to_move: board_move.piece().color.opposite(),
            resolution: Resolution::InProgress,
            decided_move: None,
            last_move: Some(AppliedMove {
                board_move: *board_move,
                captured,
                effect: None,
            }),
            castling_info: self.castling_info.after_move(board_move),
            captured_pieces,
        }
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.board
            .find(Piece::new(color, PieceKind::King))
            .map(|square| square.position)
    }
}
