//! Game orchestration between contestants.

use crate::players::Contestant;
use anyhow::Result;
use strictly_tictactoe::{Action, Board, Outcome, Player, outcome, player, result};
use tracing::{debug, info, instrument};

/// Events emitted while a session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A contestant placed a mark.
    MoveMade {
        /// Side that moved.
        player: Player,
        /// Square that was marked.
        action: Action,
        /// Board after the move.
        board: Board,
    },
    /// The game ended.
    GameOver {
        /// How it ended.
        outcome: Outcome,
    },
}

/// Runs one game between two contestants.
pub struct Session {
    board: Board,
    history: Vec<(Player, Action)>,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
}

impl Session {
    /// Creates a session starting from the empty board.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>) -> Self {
        Self::from_board(Board::new(), player_x, player_o)
    }

    /// Creates a session continuing from an existing position.
    pub fn from_board(
        board: Board,
        player_x: Box<dyn Contestant>,
        player_o: Box<dyn Contestant>,
    ) -> Self {
        Self {
            board,
            history: Vec::new(),
            player_x,
            player_o,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played in this session, in order.
    pub fn history(&self) -> &[(Player, Action)] {
        &self.history
    }

    /// Plays until the game ends, reporting each event to `on_event`.
    ///
    /// # Errors
    ///
    /// Fails if a contestant cannot produce a move, or produces one onto an
    /// occupied square.
    #[instrument(skip_all)]
    pub fn run(
        &mut self,
        mut on_event: impl FnMut(&SessionEvent) -> Result<()>,
    ) -> Result<Outcome> {
        info!("Starting game session");

        loop {
            if let Some(outcome) = outcome(&self.board) {
                info!(%outcome, moves = self.history.len(), "Game over");
                on_event(&SessionEvent::GameOver { outcome })?;
                return Ok(outcome);
            }

            let mover = player(&self.board);
            let contestant = match mover {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = %contestant.name(), "Waiting for move");
            let action = contestant.choose(&self.board)?;
            self.board = result(&self.board, action)?;
            self.history.push((mover, action));

            on_event(&SessionEvent::MoveMade {
                player: mover,
                action,
                board: self.board,
            })?;
        }
    }
}
