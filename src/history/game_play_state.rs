//! Single owner of everything a presentation layer reads.
//!
//! Hosts never mutate a `GamePlayState`; they dispatch a
//! [`GameAction`](crate::history::reducer::GameAction) through
//! [`reduce`](crate::history::reducer::reduce) and replace their copy with the
//! returned value. The accessors below form the query surface.

use std::collections::BTreeSet;

use crate::config::EngineConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::game_snapshot::{GameSnapshotState, Resolution};
use crate::history::game_history::GameState;
use crate::history::game_meta_info::GameMetaInfo;
use crate::history::promotion::PromotionState;
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::board_move::BoardMove;
use crate::utils::transcript::transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePlayState {
    pub game_state: GameState,
    pub meta: GameMetaInfo,
    pub selected: Option<Position>,
    pub promotion: PromotionState,
}

impl Default for GamePlayState {
    fn default() -> Self {
        Self::new(GameSnapshotState::new(), GameMetaInfo::default())
    }
}

impl GamePlayState {
    pub fn new(initial: GameSnapshotState, meta: GameMetaInfo) -> Self {
        Self {
            game_state: GameState::new(initial),
            meta,
            selected: None,
            promotion: PromotionState::None,
        }
    }

    /// Standard game with tags seeded from `config`.
    pub fn new_game(config: &EngineConfig) -> Self {
        Self::new(GameSnapshotState::new(), GameMetaInfo::new_game(config))
    }

    #[inline]
    pub fn current(&self) -> &GameSnapshotState {
        self.game_state.current()
    }

    pub fn board(&self) -> &Board {
        &self.current().board
    }

    pub fn to_move(&self) -> Color {
        self.current().to_move
    }

    pub fn resolution(&self) -> Resolution {
        self.current().resolution
    }

    pub fn is_game_over(&self) -> bool {
        self.resolution().is_terminal()
    }

    /// Origin and destination of the move that produced the current snapshot.
    pub fn last_move_squares(&self) -> Option<(Position, Position)> {
        self.current()
            .last_move
            .map(|applied| (applied.board_move.from(), applied.board_move.to()))
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Legal moves of the selected piece; empty once the game is over.
    pub fn possible_moves(&self) -> Vec<BoardMove> {
        match self.selected {
            Some(from) if !self.is_game_over() => legal_moves_from(self.current(), from),
            _ => Vec::new(),
        }
    }

    /// Destinations of the selected piece that capture.
    pub fn possible_capture_targets(&self) -> BTreeSet<Position> {
        let board = self.board();
        self.possible_moves()
            .iter()
            .filter(|m| m.captured_piece(board).is_some())
            .map(BoardMove::to)
            .collect()
    }

    /// Destinations of the selected piece that do not capture.
    pub fn possible_quiet_targets(&self) -> BTreeSet<Position> {
        let board = self.board();
        self.possible_moves()
            .iter()
            .filter(|m| m.captured_piece(board).is_none())
            .map(BoardMove::to)
            .collect()
    }

    /// Squares holding a piece of the side to move.
    pub fn clickable_positions(&self) -> BTreeSet<Position> {
        if self.is_game_over() {
            return BTreeSet::new();
        }
        let to_move = self.to_move();
        self.board()
            .occupied()
            .filter(|square| square.has_color(to_move))
            .map(|square| square.position)
            .collect()
    }

    /// Square of the side-to-move king when it is in check.
    pub fn checked_king(&self) -> Option<Position> {
        let snapshot = self.current();
        if is_king_in_check(snapshot, snapshot.to_move) {
            king_square(snapshot, snapshot.to_move)
        } else {
            None
        }
    }

    pub fn pending_promotion(&self) -> Option<Position> {
        self.promotion.pending_position()
    }

    /// Numbered SAN of the moves leading to the current snapshot.
    pub fn transcript(&self) -> String {
        transcript(&self.game_state)
    }

    /// Copy with selection and promotion cleared.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            selected: None,
            promotion: PromotionState::None,
            ..self.clone()
        }
    }
}
