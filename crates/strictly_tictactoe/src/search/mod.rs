//! Exact adversarial search over the tic-tac-toe game tree.
//!
//! The engine is a depth-first minimax with alpha-beta pruning. Each call
//! works on its own board value and owns its statistics, so independent
//! searches can run on separate threads without coordination.

mod alpha_beta;
mod exhaustive;
mod stats;

pub use alpha_beta::{
    ActionValue, AlphaBeta, MAX_BOUND, MIN_BOUND, Solution, Valuation, evaluate_actions,
    max_value, min_value, minimax,
};
pub use exhaustive::exhaustive_value;
pub use stats::SearchStats;
