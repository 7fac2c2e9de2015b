//! Crate root module declarations for the chess rules core.
//!
//! Exposes the immutable position model, per-piece move generation, the
//! legality engine, the snapshot history with its reducer, and notation
//! helpers, so hosts, tests, and benchmarks can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod castling_info;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_snapshot;
    pub mod zobrist;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod board_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod disambiguation;
    pub mod draw_rules;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod history {
    pub mod game_history;
    pub mod game_meta_info;
    pub mod game_play_state;
    pub mod promotion;
    pub mod reducer;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
    pub mod san;
    pub mod transcript;
}
