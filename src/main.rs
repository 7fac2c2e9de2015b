use std::io::{self, BufRead, Write};

use chess_core::config::EngineConfig;
use chess_core::errors::ChessResult;
use chess_core::game_state::chess_types::PieceKind;
use chess_core::game_state::game_snapshot::GameSnapshotState;
use chess_core::history::game_meta_info::GameMetaInfo;
use chess_core::history::game_play_state::GamePlayState;
use chess_core::history::reducer::{reduce, GameAction};
use chess_core::utils::algebraic::{parse_coordinate_move, CoordinateMove};
use chess_core::utils::render_game_state::render_board;
use chess_core::utils::san::promotion_suffix;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HELP: &str = "moves: e2e4, e7e8q | commands: back, forward, goto N, reset, quit";

fn main() {
    let config = EngineConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();

    info!("[HOST] starting {} vs {}", config.white, config.black);
    let mut state = GamePlayState::new_game(&config);
    print_state(&state);
    println!("{HELP}");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" {
            break;
        }

        match run_command(&state, &config, command) {
            Ok(next) => {
                state = next;
                print_state(&state);
            }
            Err(err) => println!("error: {err}"),
        }
        io::stdout().flush().ok();
    }
}

fn run_command(
    state: &GamePlayState,
    config: &EngineConfig,
    command: &str,
) -> ChessResult<GamePlayState> {
    let mut words = command.split_whitespace();
    match (words.next(), words.next()) {
        (Some("back"), None) => reduce(state, GameAction::StepBackward),
        (Some("forward"), None) => reduce(state, GameAction::StepForward),
        (Some("goto"), Some(index)) => match index.parse::<usize>() {
            Ok(index) => reduce(state, GameAction::GoToMove(index)),
            Err(_) => {
                println!("{HELP}");
                Ok(state.clone())
            }
        },
        (Some("reset"), None) => reduce(
            state,
            GameAction::ResetTo(
                Box::new(GameSnapshotState::new()),
                GameMetaInfo::new_game(config),
            ),
        ),
        _ => play_coordinate_move(state, parse_coordinate_move(command)?),
    }
}

/// Select, move, and pick a promotion piece (queen unless specified).
fn play_coordinate_move(state: &GamePlayState, mv: CoordinateMove) -> ChessResult<GamePlayState> {
    let state = if state.selected() == Some(mv.from) {
        state.clone()
    } else {
        reduce(state, GameAction::ToggleSelect(mv.from))?
    };
    let state = reduce(&state, GameAction::MoveTo(mv.to))?;
    if state.pending_promotion().is_some() {
        let kind = mv.promotion.unwrap_or(PieceKind::Queen);
        if let Some(letter) = promotion_suffix(kind) {
            info!("[HOST] promoting on {} to {}", mv.to, letter);
        }
        return reduce(&state, GameAction::PromoteTo(kind));
    }
    Ok(state)
}

fn print_state(state: &GamePlayState) {
    println!("{}", render_board(state.board()));
    let transcript = state.transcript();
    if !transcript.is_empty() {
        println!("{transcript}");
    }
    if state.is_game_over() {
        let outcome = if state.resolution().is_draw() { "draw" } else { "decisive" };
        println!("game over, {outcome}: {:?}", state.resolution());
        for (name, value) in state.meta.tags() {
            println!("[{name} \"{value}\"]");
        }
    } else if let Some(king) = state.checked_king() {
        println!("{} to move, king on {king} is in check", state.to_move());
    } else {
        println!("{} to move", state.to_move());
    }
}
