//! Strictly Minimax - Unified CLI
//!
//! Solve positions or play perfect-play tic-tac-toe from the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use strictly_minimax::{Cli, Command, PlayConfig, analyze, play, selfplay, solve};
use strictly_tictactoe::{Board, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve { board, json } => {
            init_tracing(PlayConfig::default().log_filter());
            let board: Board = board.parse()?;
            let mut out = BufWriter::new(io::stdout().lock());
            solve(&board, json, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Analyze { board } => {
            init_tracing(PlayConfig::default().log_filter());
            let board: Board = board.parse()?;
            let mut out = BufWriter::new(io::stdout().lock());
            analyze(&board, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Play {
            config,
            human,
            hints,
        } => {
            let config = match config {
                Some(path) => PlayConfig::from_file(path)?,
                None => PlayConfig::default(),
            }
            .apply_overrides(human.map(Player::from), hints);
            init_tracing(config.log_filter());
            run_play(&config)
        }
        Command::Selfplay { board } => {
            init_tracing(PlayConfig::default().log_filter());
            let board = match board {
                Some(board) => board.parse()?,
                None => Board::new(),
            };
            let outcome = selfplay(&board, &mut io::stdout())?;
            info!(%outcome, "Self-play finished");
            Ok(())
        }
    }
}

/// Installs the tracing subscriber, preferring `RUST_LOG` over `fallback`.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &PlayConfig) -> Result<()> {
    info!(human = %config.human(), "Starting interactive game");
    let outcome = play(config, io::stdin().lock(), io::stdout(), &mut io::stdout())?;
    info!(%outcome, "Interactive game finished");
    Ok(())
}
