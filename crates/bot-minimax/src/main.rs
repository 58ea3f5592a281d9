//! Minimax bot self-play driver.
//!
//! Plays the fixed-depth minimax bot against itself from the starting
//! position or a FEN, printing each move and the final position.

mod config;

use anyhow::Context;
use chess_core::GameState;
use chess_engine::{Game, GameResult, Searcher};
use clap::Parser;
use config::BotConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Minimax Bot - plays a game against itself.
#[derive(Parser)]
#[command(name = "bot-minimax")]
#[command(about = "Plays the minimax chess bot against itself")]
struct Args {
    /// Path to a TOML config file (defaults to bot-minimax.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Maximum number of plies to play
    #[arg(long)]
    max_plies: Option<usize>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut config = BotConfig::load(args.config.as_deref())?;
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }

    let state = match &args.fen {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("invalid FEN: {fen}"))?,
        None => GameState::new(),
    };

    tracing::info!(depth = config.depth, max_plies = config.max_plies, fen = %state.to_fen(), "starting self-play");

    let searcher = Searcher::new(config.depth);
    let mut game = Game::from_state(state);

    while game.ply_count() < config.max_plies {
        let mover = game.state().side_to_move;
        let number = game.state().fullmove_number;
        match game.play_bot(&searcher) {
            Some(m) => {
                tracing::debug!(ply = game.ply_count(), %m, fen = %game.to_fen(), "played");
                println!("{number}. {mover}: {m}");
            }
            None => break,
        }
    }

    println!();
    println!("{}", game.state().board);
    println!("{}", game.to_fen());

    match game.result() {
        Some(GameResult::WhiteWins) => println!("White wins by checkmate"),
        Some(GameResult::BlackWins) => println!("Black wins by checkmate"),
        Some(GameResult::Draw(reason)) => println!("Draw: {reason:?}"),
        None => println!("Stopped after {} plies", game.ply_count()),
    }

    Ok(())
}
