//! Perfect-play contestant backed by the minimax search.

use super::Contestant;
use anyhow::Result;
use strictly_tictactoe::{Action, AlphaBeta, Board};
use tracing::debug;

/// Engine that always plays the minimax move.
pub struct EngineContestant {
    name: String,
    searcher: AlphaBeta,
}

impl EngineContestant {
    /// Creates a new engine contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searcher: AlphaBeta::new(),
        }
    }

    /// Work done across every move chosen so far.
    pub fn searcher(&self) -> &AlphaBeta {
        &self.searcher
    }
}

impl Contestant for EngineContestant {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let Some(solution) = self.searcher.solve(board) else {
            anyhow::bail!("No valid moves available");
        };
        debug!(
            engine = %self.name,
            action = %solution.action(),
            value = solution.value(),
            "Engine chose action"
        );
        Ok(*solution.action())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_refuses_finished_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let mut engine = EngineContestant::new("Engine");
        assert!(engine.choose(&board).is_err());
    }

    #[test]
    fn test_engine_accumulates_stats() {
        let mut engine = EngineContestant::new("Engine");
        engine.choose(&Board::new()).unwrap();
        assert!(*engine.searcher().stats().nodes() > 0);
    }
}
