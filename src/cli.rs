//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_tictactoe::Player;

/// Strictly Minimax - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Solve and play tic-tac-toe with an exact minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a position
    Solve {
        /// Board as nine cells, e.g. "XO./.X./..O" ('.' is empty)
        #[arg(short, long)]
        board: String,

        /// Emit the solution as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the value of every legal move
    Analyze {
        /// Board as nine cells, e.g. "XO./.X./..O" ('.' is empty)
        #[arg(short, long)]
        board: String,
    },

    /// Play against the engine on this terminal
    Play {
        /// Path to a TOML play configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side to play (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<Side>,

        /// Show move values before each of your turns
        #[arg(long)]
        hints: bool,
    },

    /// Let the engine play both sides
    Selfplay {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<String>,
    },
}

/// Side selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Play X (moves first)
    X,
    /// Play O
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
