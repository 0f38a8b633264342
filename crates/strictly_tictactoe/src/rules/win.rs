//! Win detection logic for tic-tac-toe.

use crate::action::Action;
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

fn owns_line(board: &Board, player: Player, line: [usize; 3]) -> bool {
    line.iter().all(|&index| {
        Action::from_index(index).is_some_and(|a| board.get(a) == Square::Occupied(player))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Scans rows and columns for X, then for O,
/// and only then the two diagonals (X before O on each).
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for player in Player::iter() {
        for i in 0..3 {
            let row = [i * 3, i * 3 + 1, i * 3 + 2];
            let column = [i, i + 3, i + 6];
            if owns_line(board, player, row) || owns_line(board, player, column) {
                return Some(player);
            }
        }
    }

    for diagonal in DIAGONALS {
        for player in Player::iter() {
            if owns_line(board, player, diagonal) {
                return Some(player);
            }
        }
    }

    None
}
