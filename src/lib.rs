//! Strictly Minimax - a terminal front end for perfect-play tic-tac-toe.
//!
//! # Architecture
//!
//! - **Engine**: the `strictly_tictactoe` crate solves positions exactly
//! - **Contestants**: humans on a terminal or the engine itself
//! - **Session**: alternates contestants until the game ends
//! - **Commands**: `solve`, `analyze`, `play` and `selfplay`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod commands;
mod config;
mod players;
mod session;

// Crate-level exports - Command line
pub use cli::{Cli, Command, Side};

// Crate-level exports - Commands
pub use commands::{analyze, play, selfplay, solve};

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Contestants
pub use players::{Contestant, EngineContestant, HumanContestant};

// Crate-level exports - Session management
pub use session::{Session, SessionEvent};
