//! Leaf-node counting over the legality engine.
//!
//! Used as a regression oracle for move generation and as the workload of
//! the perft benchmark.

use crate::game_state::game_snapshot::GameSnapshotState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    has_any_legal_move, LegalMoveGenerator, MoveGenerator,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count at `depth` plies, using the standard legal generator.
pub fn perft(snapshot: &GameSnapshotState, depth: u8) -> usize {
    perft_counts(&LegalMoveGenerator, snapshot, depth).nodes
}

/// Leaf statistics at `depth` plies. Move-kind counters describe the move
/// that reached each leaf.
pub fn perft_counts<G: MoveGenerator>(
    generator: &G,
    snapshot: &GameSnapshotState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for board_move in generator.legal_moves(snapshot) {
        let next = snapshot.derive(&board_move);
        if depth > 1 {
            total.merge(perft_counts(generator, &next, depth - 1));
            continue;
        }

        total.nodes += 1;
        if board_move.captured_piece(&snapshot.board).is_some() {
            total.captures += 1;
        }
        if board_move.is_en_passant() {
            total.en_passant += 1;
        }
        if board_move.is_castle() {
            total.castles += 1;
        }
        if board_move.promotion_kind().is_some() {
            total.promotions += 1;
        }
        if is_king_in_check(&next, next.to_move) {
            total.checks += 1;
            if !has_any_legal_move(&next, next.to_move) {
                total.checkmates += 1;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_counts};
    use crate::game_state::game_snapshot::GameSnapshotState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn start_position_depth_one_and_two() {
        let snapshot = GameSnapshotState::new();
        assert_eq!(perft(&snapshot, 0), 1);
        assert_eq!(perft(&snapshot, 1), 20);
        assert_eq!(perft(&snapshot, 2), 400);
    }

    #[test]
    fn start_position_depth_three_breakdown() {
        let counts = perft_counts(&LegalMoveGenerator, &GameSnapshotState::new(), 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
        assert_eq!(counts.castles, 0);
    }
}
