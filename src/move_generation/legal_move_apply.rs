//! Turning a chosen move into a snapshot transition.

use tracing::{debug, trace};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::game_snapshot::{GameSnapshotState, Resolution};
use crate::move_generation::disambiguation::ambiguity_for;
use crate::move_generation::draw_rules::{is_insufficient_material, is_threefold_repetition};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves_from, movable_positions};
use crate::moves::board_move::{AppliedMove, BoardMove, MoveEffect};

/// Result of playing one move from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotTransition {
    /// The original snapshot annotated with the move decided from it.
    pub from_snapshot: GameSnapshotState,
    /// The position after the move, classified.
    pub to_snapshot: GameSnapshotState,
    pub applied_move: AppliedMove,
}

/// Play `board_move` from `snapshot`.
///
/// `previous_states` are the snapshots preceding `snapshot` together with
/// `snapshot` itself; they feed threefold repetition detection. The move must
/// be one of the legal moves of the side to move, otherwise
/// [`ChessErrors::IllegalMove`] is returned and nothing is applied.
pub fn calculate_applied_move(
    snapshot: &GameSnapshotState,
    board_move: &BoardMove,
    previous_states: &[GameSnapshotState],
) -> ChessResult<SnapshotTransition> {
    let from = board_move.from();
    let to = board_move.to();
    let Some(piece) = snapshot.board.piece_at(from) else {
        return Err(ChessErrors::NoPieceAt(from));
    };
    let is_legal = piece.color == snapshot.to_move
        && legal_moves_from(snapshot, from)
            .iter()
            .any(|legal| legal.same_effect(board_move));
    if !is_legal {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    let derived = snapshot.derive(board_move);
    let defender = derived.to_move;
    let movable = movable_positions(&derived, defender);
    let causes_check = is_king_in_check(&derived, defender);
    trace!(
        "[ENGINE] {} has {} movable pieces after {}{}, in check: {}",
        defender,
        movable.len(),
        from,
        to,
        causes_check
    );

    let (resolution, effect) =
        classify(&derived, movable.is_empty(), causes_check, previous_states);

    let applied_move = AppliedMove {
        board_move: board_move.with_ambiguity(ambiguity_for(snapshot, board_move)),
        captured: board_move.captured_piece(&snapshot.board),
        effect,
    };

    let to_snapshot = GameSnapshotState {
        resolution,
        decided_move: None,
        last_move: Some(applied_move),
        ..derived
    };
    if resolution.is_terminal() {
        debug!("[ENGINE] move {}{} ends the game: {:?}", from, to, resolution);
    }

    Ok(SnapshotTransition {
        from_snapshot: snapshot.with_decided_move(applied_move),
        to_snapshot,
        applied_move,
    })
}

/// One resolution and one display effect, in the order
/// checkmate, check, stalemate, insufficient material, repetition.
fn classify(
    derived: &GameSnapshotState,
    no_moves: bool,
    in_check: bool,
    previous_states: &[GameSnapshotState],
) -> (Resolution, Option<MoveEffect>) {
    if no_moves && in_check {
        return (Resolution::Checkmate, Some(MoveEffect::Checkmate));
    }
    if in_check {
        return (Resolution::InProgress, Some(MoveEffect::Check));
    }
    if no_moves {
        return (Resolution::Stalemate, Some(MoveEffect::Draw));
    }
    if is_insufficient_material(&derived.board) {
        return (Resolution::InsufficientMaterial, Some(MoveEffect::Draw));
    }
    if is_threefold_repetition(previous_states, derived) {
        return (Resolution::DrawByRepetition, Some(MoveEffect::Draw));
    }
    (Resolution::InProgress, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    fn pos(text: &str) -> Position {
        text.parse().expect("test square should parse")
    }

    fn find_move(snapshot: &GameSnapshotState, from: &str, to: &str) -> BoardMove {
        legal_moves_from(snapshot, pos(from))
            .into_iter()
            .find(|m| m.to() == pos(to))
            .expect("move should be legal in the test position")
    }

    #[test]
    fn transition_annotates_both_snapshots() {
        let snapshot = GameSnapshotState::new();
        let e4 = find_move(&snapshot, "e2", "e4");
        let transition = calculate_applied_move(&snapshot, &e4, std::slice::from_ref(&snapshot))
            .expect("e4 is legal");

        assert_eq!(transition.from_snapshot.decided_move, Some(transition.applied_move));
        assert_eq!(transition.from_snapshot.board, snapshot.board);
        assert_eq!(transition.to_snapshot.decided_move, None);
        assert_eq!(transition.to_snapshot.last_move, Some(transition.applied_move));
        assert_eq!(transition.to_snapshot.to_move, Color::Black);
        assert_eq!(transition.to_snapshot.resolution, Resolution::InProgress);
    }

    #[test]
    fn moving_out_of_turn_is_rejected() {
        let snapshot = GameSnapshotState::new();
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let result = calculate_applied_move(
            &snapshot,
            &BoardMove::simple(black_pawn, pos("e7"), pos("e5")),
            &[],
        );
        assert_eq!(
            result,
            Err(ChessErrors::IllegalMove {
                from: pos("e7"),
                to: pos("e5")
            })
        );
    }

    #[test]
    fn move_from_an_empty_square_is_rejected() {
        let snapshot = GameSnapshotState::new();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let result =
            calculate_applied_move(&snapshot, &BoardMove::simple(pawn, pos("e4"), pos("e5")), &[]);
        assert_eq!(result, Err(ChessErrors::NoPieceAt(pos("e4"))));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let board = Board::empty()
            .with_piece(pos("g8"), Piece::new(Color::Black, PieceKind::King))
            .with_piece(pos("f7"), Piece::new(Color::Black, PieceKind::Pawn))
            .with_piece(pos("g7"), Piece::new(Color::Black, PieceKind::Pawn))
            .with_piece(pos("h7"), Piece::new(Color::Black, PieceKind::Pawn))
            .with_piece(pos("a1"), Piece::new(Color::White, PieceKind::Rook))
            .with_piece(pos("g1"), Piece::new(Color::White, PieceKind::King));
        let snapshot = GameSnapshotState::from_board(board, Color::White);

        let mate = find_move(&snapshot, "a1", "a8");
        let transition = calculate_applied_move(&snapshot, &mate, std::slice::from_ref(&snapshot))
            .expect("Ra8 is legal");
        assert_eq!(transition.to_snapshot.resolution, Resolution::Checkmate);
        assert_eq!(transition.applied_move.effect, Some(MoveEffect::Checkmate));
    }

    #[test]
    fn stalemate_is_a_draw() {
        let board = Board::empty()
            .with_piece(pos("h8"), Piece::new(Color::Black, PieceKind::King))
            .with_piece(pos("f7"), Piece::new(Color::White, PieceKind::King))
            .with_piece(pos("g5"), Piece::new(Color::White, PieceKind::Queen));
        let snapshot = GameSnapshotState::from_board(board, Color::White);

        let quiet = find_move(&snapshot, "g5", "g6");
        let transition = calculate_applied_move(&snapshot, &quiet, std::slice::from_ref(&snapshot))
            .expect("Qg6 is legal");
        assert_eq!(transition.to_snapshot.resolution, Resolution::Stalemate);
        assert_eq!(transition.applied_move.effect, Some(MoveEffect::Draw));
    }

    #[test]
    fn capturing_the_last_pawn_is_insufficient_material() {
        let board = Board::empty()
            .with_piece(pos("d1"), Piece::new(Color::White, PieceKind::King))
            .with_piece(pos("d2"), Piece::new(Color::Black, PieceKind::Pawn))
            .with_piece(pos("h8"), Piece::new(Color::Black, PieceKind::King));
        let snapshot = GameSnapshotState::from_board(board, Color::White);

        let capture = find_move(&snapshot, "d1", "d2");
        let transition =
            calculate_applied_move(&snapshot, &capture, std::slice::from_ref(&snapshot))
                .expect("Kxd2 is legal");
        assert_eq!(transition.to_snapshot.resolution, Resolution::InsufficientMaterial);
        assert_eq!(
            transition.to_snapshot.captured_pieces,
            vec![Piece::new(Color::Black, PieceKind::Pawn)]
        );
    }
}
