//! Pure tic-tac-toe game logic with an exact solver.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] values, [`Player`] turn derivation, legal
//!   [`actions`], move application via [`result`], and terminal scoring.
//! - **Search engine**: [`minimax`] with alpha-beta pruning, returning the
//!   optimal move for the side to play.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), strictly_tictactoe::InvalidMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod rules;
mod search;
mod types;

// Crate-level exports - Board model
pub use action::Action;
pub use error::{BoardError, BoardErrorKind, InvalidMoveError};
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - Rules
pub use rules::{
    Utility, actions, initial_state, outcome, player, result, terminal, utility, winner,
};

// Crate-level exports - Search engine
pub use search::{
    ActionValue, AlphaBeta, MAX_BOUND, MIN_BOUND, SearchStats, Solution, Valuation,
    evaluate_actions, exhaustive_value, max_value, min_value, minimax,
};
