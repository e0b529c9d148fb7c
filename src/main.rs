//! Terminal driver for a quantum chess session.
//!
//! Run with:
//! `cargo run -- ai` (play White against the automated opponent)
//! `RUST_LOG=quantum_chess=debug cargo run` (two players, with engine logs)
//!
//! Commands: a square such as `e2` clicks it, `q` toggles quantum mode,
//! `u`/`r` undo and redo, `new pvp|ai` and `mode pvp|ai` restart or switch
//! the mode, `quit` exits.

use std::io::{self, BufRead, Write};
use std::thread;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use quantum_chess::errors::EngineResult;
use quantum_chess::session::game_config::{GameConfig, PlayMode};
use quantum_chess::session::game_session::QuantumChess;
use quantum_chess::session::turn_flow::ActionOutcome;
use quantum_chess::utils::render_game_state::render_game_state;

fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mode = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<PlayMode>().ok())
        .unwrap_or(PlayMode::Pvp);
    let mut game = QuantumChess::new(GameConfig {
        mode,
        ..GameConfig::default()
    });

    print_board(&game);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let command = line.trim();
        if command == "quit" {
            break;
        }
        if !run_command(&mut game, command)? {
            println!("unknown command: {command}");
            continue;
        }
        print_board(&game);
        play_pending_reply(&mut game)?;
    }
    Ok(())
}

/// Returns `false` when the command was not understood.
fn run_command(game: &mut QuantumChess, command: &str) -> EngineResult<bool> {
    let mut words = command.split_whitespace();
    match (words.next(), words.next()) {
        (Some("q"), None) => {
            game.toggle_quantum_mode();
        }
        (Some("u"), None) => {
            if !game.undo() {
                println!("nothing to undo");
            }
        }
        (Some("r"), None) => {
            if !game.redo() {
                println!("nothing to redo");
            }
        }
        (Some("new"), mode) => {
            let mode = match mode {
                Some(mode) => match mode.parse() {
                    Ok(mode) => mode,
                    Err(_) => return Ok(false),
                },
                None => game.mode(),
            };
            game.new_game(mode);
        }
        (Some("mode"), Some(mode)) => match mode.parse() {
            Ok(mode) => game.set_mode(mode),
            Err(_) => return Ok(false),
        },
        (Some(square), None) => match game.select_or_act_at(square) {
            Ok(ActionOutcome::Ignored) => println!("{}", ignored_reason(game)),
            Ok(_) => {}
            Err(quantum_chess::errors::EngineError::InvalidSquare(_)) => return Ok(false),
            Err(err) => return Err(err),
        },
        _ => return Ok(false),
    }
    Ok(true)
}

/// Why a click did nothing: the game has ended, or it is the automated side's turn.
fn ignored_reason(game: &QuantumChess) -> String {
    game.outcome_text().unwrap_or_else(|| "not your turn".to_owned())
}

/// Block until the automated reply (if any) is due and play it.
fn play_pending_reply(game: &mut QuantumChess) -> EngineResult<()> {
    while let Some(due_at) = game.pending_reply_at() {
        if let Ok(wait) = (due_at - Utc::now()).to_std() {
            thread::sleep(wait);
        }
        if game.tick(Utc::now())? {
            print_board(game);
        }
    }
    Ok(())
}

fn print_board(game: &QuantumChess) {
    println!("\n{}", render_game_state(game.state()));
    if let Some(text) = game.outcome_text() {
        println!("{text} Type `new` to play again.");
    }
    io::stdout().flush().ok();
}
