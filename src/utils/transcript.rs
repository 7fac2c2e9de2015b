//! Move-numbered transcript of a game history.

use crate::game_state::chess_types::Color;
use crate::history::game_history::GameState;
use crate::utils::san::to_san;

/// SAN of every move leading to the current snapshot, e.g. `1. e4 e5 2. Nf3`.
///
/// A history that starts with black to move opens with `1...`.
pub fn transcript(game_state: &GameState) -> String {
    let confirmed = game_state.confirmed_history();
    let mut parts = Vec::with_capacity(confirmed.len());
    let mut move_number = 1usize;

    for (ply, snapshot) in confirmed.iter().skip(1).enumerate() {
        let Some(applied) = snapshot.last_move else {
            continue;
        };
        let mover = applied.board_move.piece().color;
        let san = to_san(&applied);
        match mover {
            Color::White => parts.push(format!("{move_number}. {san}")),
            Color::Black if ply == 0 => parts.push(format!("{move_number}... {san}")),
            Color::Black => parts.push(san),
        }
        if mover == Color::Black {
            move_number += 1;
        }
    }
    parts.join(" ")
}
