//! Draw conditions checked independently of move availability.

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_snapshot::GameSnapshotState;
use crate::game_state::zobrist::repetition_hash;

/// Occurrences of the same reduced position that end the game.
pub const REPETITION_LIMIT: usize = 3;

/// King vs king, king and a single minor piece vs king, or exactly two
/// bishops on squares of one color beside the two kings.
///
/// Positions such as king and bishop vs king and bishop on opposite square
/// colors, or larger same-colored bishop sets, are not recognised.
pub fn is_insufficient_material(board: &Board) -> bool {
    let non_kings: Vec<_> = board
        .occupied()
        .filter(|square| square.piece.is_some_and(|piece| piece.kind != PieceKind::King))
        .collect();
    let total = board.piece_count();
    let kinds: Vec<PieceKind> = non_kings
        .iter()
        .filter_map(|square| square.piece.map(|piece| piece.kind))
        .collect();

    match kinds.as_slice() {
        [] => total == 2,
        [PieceKind::Bishop] | [PieceKind::Knight] => total == 3,
        [PieceKind::Bishop, PieceKind::Bishop] => {
            total == 4
                && non_kings[0].position.is_light_square()
                    == non_kings[1].position.is_light_square()
        }
        _ => false,
    }
}

/// Whether any reduced position occurs `REPETITION_LIMIT` times among
/// `previous` followed by `candidate`.
pub fn is_threefold_repetition(
    previous: &[GameSnapshotState],
    candidate: &GameSnapshotState,
) -> bool {
    let mut seen: HashMap<u64, usize> = HashMap::new();
    previous
        .iter()
        .chain(std::iter::once(candidate))
        .any(|snapshot| {
            let count = seen.entry(repetition_hash(snapshot)).or_insert(0);
            *count += 1;
            *count >= REPETITION_LIMIT
        })
}
