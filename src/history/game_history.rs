//! Append-only snapshot history with a movable cursor.
//!
//! Index 0 holds the position before the first move; the snapshot produced
//! by move `i` (0-based) lives at index `i + 1`. Playing a move while the
//! cursor is not at the end discards every snapshot after the cursor.

use tracing::trace;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::move_generation::legal_move_apply::{calculate_applied_move, SnapshotTransition};
use crate::moves::board_move::BoardMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    states: Vec<GameSnapshotState>,
    current_index: usize,
    /// Snapshot that was current before the cursor last moved.
    last_active_state: Option<GameSnapshotState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameSnapshotState::new())
    }
}

impl GameState {
    pub fn new(initial: GameSnapshotState) -> Self {
        Self {
            states: vec![initial],
            current_index: 0,
            last_active_state: None,
        }
    }

    #[inline]
    pub fn current(&self) -> &GameSnapshotState {
        &self.states[self.current_index]
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn states(&self) -> &[GameSnapshotState] {
        &self.states
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true; a history always holds its initial snapshot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn last_active_state(&self) -> Option<&GameSnapshotState> {
        self.last_active_state.as_ref()
    }

    /// Snapshots up to and including the cursor.
    pub fn confirmed_history(&self) -> &[GameSnapshotState] {
        &self.states[..=self.current_index]
    }

    /// Non-clamped lookup.
    pub fn snapshot_at(&self, index: usize) -> ChessResult<&GameSnapshotState> {
        self.states
            .get(index)
            .ok_or(ChessErrors::HistoryIndexOutOfBounds {
                index,
                len: self.states.len(),
            })
    }

    /// Cursor moved to `index`, clamped to the last snapshot.
    #[must_use]
    pub fn go_to_index(&self, index: usize) -> Self {
        let target = index.min(self.states.len() - 1);
        if target == self.current_index {
            return self.clone();
        }
        trace!("[HISTORY] cursor {} -> {}", self.current_index, target);
        Self {
            states: self.states.clone(),
            current_index: target,
            last_active_state: Some(self.current().clone()),
        }
    }

    /// Cursor moved by `delta`; requests past either end leave it unchanged.
    #[must_use]
    pub fn step(&self, delta: isize) -> Self {
        match self.current_index.checked_add_signed(delta) {
            Some(target) if target < self.states.len() => self.go_to_index(target),
            _ => self.clone(),
        }
    }

    #[must_use]
    pub fn step_forward(&self) -> Self {
        self.step(1)
    }

    #[must_use]
    pub fn step_backward(&self) -> Self {
        self.step(-1)
    }

    /// Cursor on the snapshot produced by move `move_index`, clamped.
    #[must_use]
    pub fn go_to_move(&self, move_index: usize) -> Self {
        self.go_to_index(move_index.saturating_add(1))
    }

    /// Play `board_move` from the current snapshot.
    pub fn play(&self, board_move: &BoardMove) -> ChessResult<(Self, SnapshotTransition)> {
        let transition =
            calculate_applied_move(self.current(), board_move, self.confirmed_history())?;
        Ok((self.apply_transition(&transition), transition))
    }

    /// Truncate after the cursor, annotate the current snapshot with the
    /// decided move, and append the new one.
    #[must_use]
    pub fn apply_transition(&self, transition: &SnapshotTransition) -> Self {
        let mut states = self.states[..self.current_index].to_vec();
        states.push(transition.from_snapshot.clone());
        states.push(transition.to_snapshot.clone());

        Self {
            current_index: states.len() - 1,
            states,
            last_active_state: Some(self.current().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Position;
    use crate::move_generation::legal_move_generator::legal_moves_from;

    fn pos(text: &str) -> Position {
        text.parse().expect("test square should parse")
    }

    fn play(state: &GameState, from: &str, to: &str) -> GameState {
        let board_move = legal_moves_from(state.current(), pos(from))
            .into_iter()
            .find(|m| m.to() == pos(to))
            .expect("move should be legal");
        state.play(&board_move).expect("legal move should apply").0
    }

    #[test]
    fn stepping_is_clamped() {
        let state = GameState::default();
        assert_eq!(state.step_backward(), state);
        assert_eq!(state.step_forward(), state);

        let played = play(&state, "e2", "e4");
        assert_eq!(played.current_index(), 1);
        assert_eq!(played.step_forward().current_index(), 1);
        assert_eq!(played.step_backward().current_index(), 0);
        assert_eq!(played.step(-5).current_index(), 1);
    }

    #[test]
    fn go_to_move_addresses_the_resulting_snapshot() {
        let state = play(&play(&GameState::default(), "e2", "e4"), "e7", "e5");
        assert_eq!(state.go_to_move(0).current_index(), 1);
        assert_eq!(state.go_to_move(1).current_index(), 2);
        assert_eq!(state.go_to_move(40).current_index(), 2);
    }

    #[test]
    fn playing_after_stepping_back_discards_the_old_branch() {
        let state = play(
            &play(&play(&GameState::default(), "e2", "e4"), "e7", "e5"),
            "g1",
            "f3",
        );
        assert_eq!(state.len(), 4);

        let rewound = state.step_backward().step_backward();
        let branched = play(&rewound, "c7", "c5");
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.current_index(), 2);
        assert_eq!(branched.go_to_move(2).current_index(), 2);
        assert!(branched.current().board.piece_at(pos("c5")).is_some());
        assert!(branched.current().board.piece_at(pos("e5")).is_none());
    }

    #[test]
    fn decided_move_is_recorded_on_the_from_snapshot() {
        let state = play(&GameState::default(), "d2", "d4");
        let first = state.snapshot_at(0).expect("initial snapshot exists");
        assert_eq!(
            first.decided_move.map(|applied| applied.board_move.to()),
            Some(pos("d4"))
        );
        assert!(state.last_active_state().is_some());
    }

    #[test]
    fn unclamped_lookup_reports_out_of_bounds() {
        let state = GameState::default();
        assert_eq!(
            state.snapshot_at(3),
            Err(ChessErrors::HistoryIndexOutOfBounds { index: 3, len: 1 })
        );
    }
}
