//! Starting position and turn order.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the starting board: all nine squares empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on the board.
///
/// X moves first and whenever both sides have placed the same number of
/// marks. Defined for any configuration, legal or not.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}
