//! Minimax with alpha-beta pruning.
//!
//! `max_value` and `min_value` each take a single `bound`: the value the
//! opposing side can already guarantee at the parent. Once the running best
//! reaches it, the remaining siblings cannot change the parent's choice and
//! are skipped. Called with [`MAX_BOUND`] or [`MIN_BOUND`] the returned value
//! is the exact minimax value of the position.

use super::stats::SearchStats;
use crate::action::Action;
use crate::rules::moves::advance;
use crate::rules::{Utility, actions, player, terminal, utility};
use crate::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Stands in for +infinity: above every real utility.
pub const MAX_BOUND: Utility = 2;
/// Stands in for -infinity: below every real utility.
pub const MIN_BOUND: Utility = -2;

/// Value of a position and the action that achieves it.
///
/// `action` is `None` on terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    /// Best utility found, from X's point of view.
    pub value: Utility,
    /// First action in row-major order reaching `value`.
    pub action: Option<Action>,
}

/// The optimal move for the side to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Solution {
    /// Side to move.
    player: Player,
    /// Move to play.
    action: Action,
    /// Outcome under perfect play, from X's point of view.
    value: Utility,
    /// Work done finding it.
    stats: SearchStats,
}

/// Minimax value of one legal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionValue {
    /// The candidate action.
    pub action: Action,
    /// Outcome under perfect play after taking it, from X's point of view.
    pub value: Utility,
}

/// Alpha-beta searcher that records how much of the tree it visits.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    /// Creates a searcher with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics accumulated over every search run by this searcher.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Finds the optimal action for the side to move.
    ///
    /// Returns `None` on a terminal board: the game is over and there is
    /// nothing to play.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn solve(&mut self, board: &Board) -> Option<Solution> {
        if terminal(board) {
            debug!("Board is terminal, no action to search");
            return None;
        }

        let earlier = std::mem::take(&mut self.stats);
        let mover = player(board);
        let valuation = match mover {
            Player::X => self.max_value(board, MAX_BOUND),
            Player::O => self.min_value(board, MIN_BOUND),
        };
        let stats = std::mem::replace(&mut self.stats, earlier);
        self.stats.merge(&stats);
        let action = valuation.action?;
        debug!(%mover, %action, value = valuation.value, %stats, "Search complete");

        Some(Solution {
            player: mover,
            action,
            value: valuation.value,
            stats,
        })
    }

    /// Exact minimax value of `board`, searched with a full window.
    pub fn value(&mut self, board: &Board) -> Utility {
        match player(board) {
            Player::X => self.max_value(board, MAX_BOUND).value,
            Player::O => self.min_value(board, MIN_BOUND).value,
        }
    }

    /// Best utility X can reach from `board`, giving up once it reaches
    /// `bound`.
    pub fn max_value(&mut self, board: &Board, bound: Utility) -> Valuation {
        self.stats.enter();
        if terminal(board) {
            self.stats.leaf();
            return Valuation {
                value: utility(board),
                action: None,
            };
        }

        let mut best = Valuation {
            value: MIN_BOUND,
            action: None,
        };
        for action in actions(board) {
            if best.value >= bound {
                self.stats.cutoff();
                break;
            }
            let reply = self.min_value(&advance(board, action), best.value).value;
            if reply > best.value {
                best = Valuation {
                    value: reply,
                    action: Some(action),
                };
            }
        }
        best
    }

    /// Best utility O can reach from `board`, giving up once it falls to
    /// `bound`.
    pub fn min_value(&mut self, board: &Board, bound: Utility) -> Valuation {
        self.stats.enter();
        if terminal(board) {
            self.stats.leaf();
            return Valuation {
                value: utility(board),
                action: None,
            };
        }

        let mut best = Valuation {
            value: MAX_BOUND,
            action: None,
        };
        for action in actions(board) {
            if best.value <= bound {
                self.stats.cutoff();
                break;
            }
            let reply = self.max_value(&advance(board, action), best.value).value;
            if reply < best.value {
                best = Valuation {
                    value: reply,
                    action: Some(action),
                };
            }
        }
        best
    }

    /// Exact value of every legal action on `board`, in row-major order.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn evaluate_actions(&mut self, board: &Board) -> Vec<ActionValue> {
        if terminal(board) {
            return Vec::new();
        }
        actions(board)
            .into_iter()
            .map(|action| ActionValue {
                action,
                value: self.value(&advance(board, action)),
            })
            .collect()
    }
}

/// Returns the optimal action for the player to move, or `None` if the game
/// is over.
///
/// Among equally good actions the first in row-major order is chosen.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Action> {
    AlphaBeta::new().solve(board).map(|solution| solution.action)
}

/// Best utility X can reach from `board`, pruning once `bound` is reached.
pub fn max_value(board: &Board, bound: Utility) -> Valuation {
    AlphaBeta::new().max_value(board, bound)
}

/// Best utility O can reach from `board`, pruning once `bound` is reached.
pub fn min_value(board: &Board, bound: Utility) -> Valuation {
    AlphaBeta::new().min_value(board, bound)
}

/// Exact value of every legal action on `board`, in row-major order.
pub fn evaluate_actions(board: &Board) -> Vec<ActionValue> {
    AlphaBeta::new().evaluate_actions(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_action() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&board), None);
        assert_eq!(AlphaBeta::new().solve(&board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2).unwrap()));
    }

    #[test]
    fn test_o_blocks_threat() {
        // X threatens the top row; O has no win of its own.
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2).unwrap()));
    }

    #[test]
    fn test_terminal_valuation() {
        let board: Board = "XX./OOO/X..".parse().unwrap();
        let valuation = max_value(&board, MAX_BOUND);
        assert_eq!(valuation, Valuation { value: -1, action: None });
    }

    #[test]
    fn test_solve_reports_stats() {
        let mut searcher = AlphaBeta::new();
        let solution = searcher.solve(&Board::new()).unwrap();
        assert_eq!(*solution.value(), 0);
        assert_eq!(*solution.player(), Player::X);
        assert!(*solution.stats().cutoffs() > 0);
        assert_eq!(solution.stats(), searcher.stats());
    }

    #[test]
    fn test_evaluate_actions_marks_winning_square() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let values = evaluate_actions(&board);
        assert_eq!(values.len(), 5);
        let win = values
            .iter()
            .find(|v| v.action == Action::new(0, 2).unwrap())
            .unwrap();
        assert_eq!(win.value, 1);
    }
}
