//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine can compose them freely.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{actions, result};
pub use terminal::{Utility, outcome, terminal, utility};
pub use turn::{initial_state, player};
pub use win::winner;
