//! Pawn advances, diagonal captures, en passant, and promotion expansion.

use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::moves::board_move::{BoardMove, Consequence, PreMove};

pub fn generate_pawn_moves(
    snapshot: &GameSnapshotState,
    piece: Piece,
    from: Position,
    out: &mut Vec<BoardMove>,
) {
    let board = &snapshot.board;
    let color = piece.color;
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(0, dir).filter(|p| board.piece_at(*p).is_none()) {
        push_with_promotions(BoardMove::simple(piece, from, one), out);

        if from.rank() == color.pawn_start_rank() {
            if let Some(two) = from.offset(0, 2 * dir).filter(|p| board.piece_at(*p).is_none()) {
                out.push(BoardMove::simple(piece, from, two));
            }
        }
    }

    for d_file in [-1i8, 1] {
        let Some(target) = board.get_at(from.file() as i8 + d_file, from.rank() as i8 + dir) else {
            continue;
        };
        if target.has_color(color.opposite()) {
            push_with_promotions(BoardMove::simple(piece, from, target.position), out);
        }
    }

    if let Some(ep) = en_passant_capture(snapshot, piece, from) {
        out.push(ep);
    }
}

/// The en passant capture available to the pawn on `from`, if any.
///
/// Only the immediately preceding move can enable it: an enemy pawn that
/// advanced two ranks from its starting rank and landed beside this pawn.
fn en_passant_capture(
    snapshot: &GameSnapshotState,
    piece: Piece,
    from: Position,
) -> Option<BoardMove> {
    let color = piece.color;
    if from.rank() != color.en_passant_rank() {
        return None;
    }

    let last = snapshot.last_move?.board_move;
    let enemy = last.piece();
    let double_step = enemy.is(color.opposite(), PieceKind::Pawn)
        && last.from().rank() == color.opposite().pawn_start_rank()
        && last.from().rank().abs_diff(last.to().rank()) == 2;
    let beside = last.to().rank() == from.rank() && last.to().file().abs_diff(from.file()) == 1;
    if !double_step || !beside {
        return None;
    }

    let to = Position::from_file_rank(
        last.to().file() as i8,
        from.rank() as i8 + color.pawn_direction(),
    )?;
    Some(BoardMove::simple(piece, from, to).with_pre_move(PreMove::Capture {
        piece: enemy,
        position: last.to(),
    }))
}

/// Pushes `base`, or its four promotion variants when it reaches the last rank.
fn push_with_promotions(base: BoardMove, out: &mut Vec<BoardMove>) {
    let piece = base.piece();
    if base.to().rank() != piece.color.promotion_rank() {
        out.push(base);
        return;
    }

    for kind in PieceKind::PROMOTION_CHOICES {
        out.push(base.with_consequence(Consequence::Promotion {
            position: base.to(),
            piece: Piece::new(piece.color, kind),
        }));
    }
}
