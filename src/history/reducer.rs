//! Pure transition function over [`GamePlayState`].
//!
//! Every user intent is a [`GameAction`]. [`reduce`] never edits its input;
//! on error nothing is applied and the caller keeps its previous state.

use tracing::{debug, info, warn};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::history::game_history::GameState;
use crate::history::game_meta_info::GameMetaInfo;
use crate::history::game_play_state::GamePlayState;
use crate::history::promotion::{all_promotions, promotion_for, PromotionState};
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::board_move::BoardMove;
use crate::utils::san::to_san;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    StepForward,
    StepBackward,
    /// Jump to the snapshot produced by move `i` (0-based), clamped.
    GoToMove(usize),
    /// Discard all history and start over from this snapshot.
    ResetTo(Box<GameSnapshotState>, GameMetaInfo),
    /// Select a piece of the side to move, or clear the selection.
    ToggleSelect(Position),
    /// Move the selected piece to this square, asking for a promotion piece when needed.
    MoveTo(Position),
    ApplyMove(BoardMove),
    RequestPromotion(Position),
    PromoteTo(PieceKind),
}

pub fn reduce(state: &GamePlayState, action: GameAction) -> ChessResult<GamePlayState> {
    debug!("[GAME] action {:?}", action);
    let result = dispatch(state, action);
    if let Err(err) = &result {
        warn!("[GAME] rejected action: {}", err);
    }
    result
}

fn dispatch(state: &GamePlayState, action: GameAction) -> ChessResult<GamePlayState> {
    match action {
        GameAction::StepForward => Ok(navigate(state, state.game_state.step_forward())),
        GameAction::StepBackward => Ok(navigate(state, state.game_state.step_backward())),
        GameAction::GoToMove(index) => Ok(navigate(state, state.game_state.go_to_move(index))),
        GameAction::ResetTo(snapshot, meta) => {
            info!("[GAME] reset");
            Ok(GamePlayState::new(*snapshot, meta))
        }
        GameAction::ToggleSelect(position) => Ok(toggle_select(state, position)),
        GameAction::MoveTo(position) => move_to(state, position),
        GameAction::ApplyMove(board_move) => apply_move(state, &board_move),
        GameAction::RequestPromotion(position) => request_promotion(state, position),
        GameAction::PromoteTo(kind) => promote_to(state, kind),
    }
}

fn navigate(state: &GamePlayState, game_state: GameState) -> GamePlayState {
    GamePlayState {
        game_state,
        ..state.cleared()
    }
}

fn toggle_select(state: &GamePlayState, position: Position) -> GamePlayState {
    if state.is_game_over() {
        debug!("[GAME] game is over, ignoring selection of {}", position);
        return state.clone();
    }
    if state.selected == Some(position) {
        return state.cleared();
    }
    if state.board().get(position).has_color(state.to_move()) {
        return GamePlayState {
            selected: Some(position),
            ..state.cleared()
        };
    }
    state.clone()
}

/// Legal moves of the selected piece that land on `to`.
fn moves_to(state: &GamePlayState, to: Position) -> ChessResult<(Position, Vec<BoardMove>)> {
    let from = state.selected.ok_or(ChessErrors::NoSelection)?;
    let moves: Vec<BoardMove> = legal_moves_from(state.current(), from)
        .into_iter()
        .filter(|m| m.to() == to)
        .collect();
    if moves.is_empty() {
        return Err(ChessErrors::IllegalMove { from, to });
    }
    Ok((from, moves))
}

fn move_to(state: &GamePlayState, to: Position) -> ChessResult<GamePlayState> {
    if state.is_game_over() {
        debug!("[GAME] game is over, ignoring move to {}", to);
        return Ok(state.clone());
    }

    let (from, moves) = moves_to(state, to)?;
    if !all_promotions(&moves) {
        return apply_move(state, &moves[0]);
    }

    match state.promotion {
        PromotionState::ContinueWith(kind) => {
            let chosen = promotion_for(&moves, kind)
                .ok_or(ChessErrors::NoPromotionCandidate { to, kind })?;
            apply_move(state, &chosen)
        }
        _ => {
            debug!("[GAME] {}{} needs a promotion piece", from, to);
            Ok(GamePlayState {
                promotion: PromotionState::Await(to),
                ..state.clone()
            })
        }
    }
}

fn request_promotion(state: &GamePlayState, to: Position) -> ChessResult<GamePlayState> {
    let (from, moves) = moves_to(state, to)?;
    if !all_promotions(&moves) {
        return Err(ChessErrors::IllegalMove { from, to });
    }
    Ok(GamePlayState {
        promotion: PromotionState::Await(to),
        ..state.clone()
    })
}

fn promote_to(state: &GamePlayState, kind: PieceKind) -> ChessResult<GamePlayState> {
    let PromotionState::Await(to) = state.promotion else {
        return Err(ChessErrors::NotAwaitingPromotion);
    };
    let continuing = GamePlayState {
        promotion: PromotionState::ContinueWith(kind),
        ..state.clone()
    };
    move_to(&continuing, to)
}

fn apply_move(state: &GamePlayState, board_move: &BoardMove) -> ChessResult<GamePlayState> {
    if state.is_game_over() {
        debug!("[GAME] game is over, ignoring {}{}", board_move.from(), board_move.to());
        return Ok(state.clone());
    }

    let (game_state, transition) = state.game_state.play(board_move)?;
    let applied = transition.applied_move;
    let resolution = transition.to_snapshot.resolution;
    info!("[GAME] {} plays {}", applied.board_move.piece().color, to_san(&applied));

    if resolution.is_terminal() {
        info!("[GAME] game over: {:?}", resolution);
    }
    // A branch played from an earlier snapshot may replace a finished line.
    let meta = state
        .meta
        .clone()
        .with_resolution(resolution, applied.board_move.piece().color);

    Ok(GamePlayState {
        game_state,
        meta,
        selected: None,
        promotion: PromotionState::None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece};

    fn pos(text: &str) -> Position {
        text.parse().expect("test square should parse")
    }

    fn click_move(state: &GamePlayState, from: &str, to: &str) -> GamePlayState {
        let selected =
            reduce(state, GameAction::ToggleSelect(pos(from))).expect("select is infallible");
        reduce(&selected, GameAction::MoveTo(pos(to))).expect("move should be legal")
    }

    fn promotion_setup() -> GamePlayState {
        let board = Board::empty()
            .with_piece(pos("b7"), Piece::new(Color::White, PieceKind::Pawn))
            .with_piece(pos("e1"), Piece::new(Color::White, PieceKind::King))
            .with_piece(pos("h8"), Piece::new(Color::Black, PieceKind::King));
        GamePlayState::new(
            GameSnapshotState::from_board(board, Color::White),
            GameMetaInfo::default(),
        )
    }

    #[test]
    fn toggle_selects_and_deselects() {
        let state = GamePlayState::default();
        let selected = reduce(&state, GameAction::ToggleSelect(pos("e2"))).expect("select works");
        assert_eq!(selected.selected(), Some(pos("e2")));

        let cleared =
            reduce(&selected, GameAction::ToggleSelect(pos("e2"))).expect("deselect works");
        assert_eq!(cleared.selected(), None);

        let ignored =
            reduce(&state, GameAction::ToggleSelect(pos("e7"))).expect("enemy click is a no-op");
        assert_eq!(ignored, state);
    }

    #[test]
    fn move_to_applies_and_clears_selection() {
        let state = click_move(&GamePlayState::default(), "e2", "e4");
        assert_eq!(state.game_state.current_index(), 1);
        assert_eq!(state.selected(), None);
        assert_eq!(state.to_move(), Color::Black);
        assert_eq!(state.last_move_squares(), Some((pos("e2"), pos("e4"))));
    }

    #[test]
    fn move_without_selection_is_rejected() {
        let state = GamePlayState::default();
        assert_eq!(
            reduce(&state, GameAction::MoveTo(pos("e4"))),
            Err(ChessErrors::NoSelection)
        );
    }

    #[test]
    fn promotion_waits_for_a_piece_then_applies_it() {
        let state = reduce(&promotion_setup(), GameAction::ToggleSelect(pos("b7")))
            .expect("select works");
        let awaiting =
            reduce(&state, GameAction::MoveTo(pos("b8"))).expect("promotion is requested");
        assert_eq!(awaiting.pending_promotion(), Some(pos("b8")));
        assert_eq!(awaiting.game_state.current_index(), 0);

        let promoted = reduce(&awaiting, GameAction::PromoteTo(PieceKind::Knight))
            .expect("knight promotion applies");
        assert_eq!(promoted.promotion, PromotionState::None);
        assert_eq!(
            promoted.board().piece_at(pos("b8")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
    }

    #[test]
    fn explicit_promotion_request() {
        let state = reduce(&promotion_setup(), GameAction::ToggleSelect(pos("b7")))
            .expect("select works");
        let awaiting =
            reduce(&state, GameAction::RequestPromotion(pos("b8"))).expect("request works");
        assert!(awaiting.promotion.is_awaiting());
    }

    #[test]
    fn promote_without_request_is_a_contract_violation() {
        let state = promotion_setup();
        assert_eq!(
            reduce(&state, GameAction::PromoteTo(PieceKind::Queen)),
            Err(ChessErrors::NotAwaitingPromotion)
        );
    }

    #[test]
    fn illegal_apply_move_is_rejected_without_change() {
        let state = GamePlayState::default();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let result = reduce(
            &state,
            GameAction::ApplyMove(BoardMove::simple(rook, pos("a1"), pos("a5"))),
        );
        assert_eq!(
            result,
            Err(ChessErrors::IllegalMove {
                from: pos("a1"),
                to: pos("a5")
            })
        );
    }

    #[test]
    fn reset_discards_history() {
        let played = click_move(&GamePlayState::default(), "d2", "d4");
        let reset = reduce(
            &played,
            GameAction::ResetTo(Box::new(GameSnapshotState::new()), GameMetaInfo::default()),
        )
        .expect("reset is infallible");
        assert_eq!(reset.game_state.len(), 1);
        assert_eq!(reset, GamePlayState::default());
    }
}
