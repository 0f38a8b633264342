//! Implementations of the command-line subcommands.
//!
//! Every command writes to a caller-supplied writer so it can be driven
//! from tests as well as from `main`.

use crate::config::PlayConfig;
use crate::players::{Contestant, EngineContestant, HumanContestant};
use crate::session::{Session, SessionEvent};
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_tictactoe::{AlphaBeta, Board, Outcome, Player, Solution, Utility, outcome, player};
use tracing::{info, instrument};

/// JSON shape printed by `solve --json`.
#[derive(Debug, Serialize)]
struct SolveReport {
    board: Board,
    to_move: Player,
    solution: Option<Solution>,
    outcome: Option<Outcome>,
}

fn describe(value: Utility) -> &'static str {
    match value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

/// Prints the optimal move for `board`.
#[instrument(skip(board, out), fields(board = %board))]
pub fn solve(board: &Board, json: bool, out: &mut impl Write) -> Result<()> {
    let solution = AlphaBeta::new().solve(board);

    if json {
        let report = SolveReport {
            board: *board,
            to_move: player(board),
            solution,
            outcome: outcome(board),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "{board}\n")?;
    match solution {
        Some(solution) => {
            writeln!(out, "To move:  {}", solution.player())?;
            writeln!(
                out,
                "Best:     {} {}",
                solution.action(),
                solution.action().label()
            )?;
            writeln!(out, "Outcome:  {} with perfect play", describe(*solution.value()))?;
            writeln!(out, "Searched: {}", solution.stats())?;
        }
        None => {
            let result = outcome(board).map_or_else(|| "Game over".to_string(), |o| o.to_string());
            writeln!(out, "Game over: {result}")?;
        }
    }
    Ok(())
}

/// Prints the value of every legal move on `board`.
#[instrument(skip(board, out), fields(board = %board))]
pub fn analyze(board: &Board, out: &mut impl Write) -> Result<()> {
    let mut searcher = AlphaBeta::new();
    let values = searcher.evaluate_actions(board);
    let mover = player(board);
    let best_value = match mover {
        Player::X => values.iter().map(|v| v.value).max(),
        Player::O => values.iter().map(|v| v.value).min(),
    };
    let best = values
        .iter()
        .find(|v| Some(v.value) == best_value)
        .map(|v| v.action);

    writeln!(out, "{board}\n")?;
    if values.is_empty() {
        writeln!(out, "No legal moves.")?;
        return Ok(());
    }

    writeln!(out, "{mover} to move:")?;
    for value in values {
        let marker = if Some(value.action) == best { " <- best" } else { "" };
        writeln!(
            out,
            "  {} {:<13} {}{}",
            value.action,
            value.action.label(),
            describe(value.value),
            marker
        )?;
    }
    info!(stats = %searcher.stats(), "Analysis complete");
    Ok(())
}

fn report_event(out: &mut impl Write, event: &SessionEvent) -> Result<()> {
    match event {
        SessionEvent::MoveMade {
            player,
            action,
            board,
        } => writeln!(out, "\n{} plays {} {}\n{}", player, action, action.label(), board)?,
        SessionEvent::GameOver { outcome } => writeln!(out, "\n{outcome}")?,
    }
    Ok(())
}

/// Lets the engine play both sides from `board` until the game ends.
#[instrument(skip(board, out), fields(board = %board))]
pub fn selfplay(board: &Board, out: &mut impl Write) -> Result<Outcome> {
    writeln!(out, "{board}")?;
    let mut session = Session::from_board(
        *board,
        Box::new(EngineContestant::new("Engine X")),
        Box::new(EngineContestant::new("Engine O")),
    );
    session.run(|event| report_event(out, event))
}

/// Plays a human reading `input` against the engine.
///
/// Prompts go to `prompts`; moves and the final result go to `out`.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn play<R, W>(
    config: &PlayConfig,
    input: R,
    prompts: W,
    out: &mut impl Write,
) -> Result<Outcome>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let human: Box<dyn Contestant> =
        Box::new(HumanContestant::new("You", input, prompts).with_hints(*config.show_hints()));
    let engine: Box<dyn Contestant> = Box::new(EngineContestant::new("Engine"));

    let (player_x, player_o) = match config.human() {
        Player::X => (human, engine),
        Player::O => (engine, human),
    };

    writeln!(out, "{}", Board::new())?;
    let mut session = Session::new(player_x, player_o);
    session.run(|event| report_event(out, event))
}
