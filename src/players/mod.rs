//! Contestant trait and implementations.

mod engine;
mod human;

pub use engine::EngineContestant;
pub use human::HumanContestant;

use anyhow::Result;
use strictly_tictactoe::{Action, Board};

/// Anything that can pick a move for the side to play.
pub trait Contestant {
    /// Chooses an action on a board where it is this contestant's turn.
    ///
    /// The returned action must be empty on `board`.
    fn choose(&mut self, board: &Board) -> Result<Action>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
