//! Interactive driver and self-play demo for the Connect Four engine.
//!
//! The driver owns the loop the engine deliberately does not: hold a state,
//! ask for a column, transition, render, repeat until the state is final.

use anyhow::Context;
use connect_core::{GameAction, GameState, Player};
use rand::seq::SliceRandom;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let demo = args.iter().any(|a| a == "--demo");
    let json = args.iter().any(|a| a == "--json");
    let color = !args.iter().any(|a| a == "--no-color");

    let start = if args.iter().any(|a| a == "--yellow-starts") {
        Player::Yellow
    } else {
        Player::Red
    };

    let final_state = if demo {
        run_demo(start, color)
    } else {
        run_interactive(start, color)?
    };

    println!("{}", render::verdict(&final_state));
    if json {
        let dump = serde_json::to_string_pretty(&final_state)
            .context("serializing final state")?;
        println!("{dump}");
    }
    Ok(())
}

/// Read column indices from stdin until the game ends or input runs dry
fn run_interactive(start: Player, color: bool) -> anyhow::Result<GameState> {
    let stdin = io::stdin();
    let mut state = GameState::with_start(start);

    let mut lines = stdin.lock().lines();
    while !state.is_final() {
        print!("{}", render::render(&state, color));
        print!("{:?} > ", state.current_player());
        io::stdout().flush().context("flushing prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("reading stdin")?,
            None => {
                info!("input closed, leaving the game unfinished");
                break;
            }
        };

        let action = line.parse().unwrap_or(GameAction::Malformed);
        match state.transition(action) {
            Ok(next) => state = next,
            Err(err) => {
                warn!(input = %line.trim(), %err, "move rejected");
                println!("{err}; free columns: {:?}", state.free_columns());
            }
        }
    }

    print!("{}", render::render(&state, color));
    Ok(state)
}

/// Play both sides with uniformly random legal moves
fn run_demo(start: Player, color: bool) -> GameState {
    let mut rng = rand::thread_rng();
    let mut state = GameState::with_start(start);
    let mut moves = 0u32;

    while !state.is_final() {
        let free = state.free_columns();
        // A non-final state always has a free column
        let Some(&col) = free.choose(&mut rng) else {
            break;
        };
        let mover = state.current_player();
        match state.transition(GameAction::Drop(col)) {
            Ok(next) => {
                info!(?mover, col, "demo move");
                state = next;
                moves += 1;
            }
            Err(err) => {
                warn!(col, %err, "demo produced an illegal move");
                break;
            }
        }
    }

    info!(moves, "demo game finished");
    print!("{}", render::render(&state, color));
    state
}
