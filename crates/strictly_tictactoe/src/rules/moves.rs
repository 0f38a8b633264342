//! Legal move enumeration and move application.

use crate::action::Action;
use crate::error::InvalidMoveError;
use crate::rules::turn::player;
use crate::types::{Board, Square};
use tracing::{instrument, warn};

/// Returns every empty square as an action, in row-major order.
///
/// The fixed order makes search results reproducible.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board that results from the player to move marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidMoveError`] if the square is already occupied.
#[instrument(level = "trace", skip(board), fields(action = %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidMoveError> {
    if let Square::Occupied(occupant) = board.get(action) {
        warn!(%action, %occupant, "Rejected move onto occupied square");
        return Err(InvalidMoveError::new(action, occupant));
    }
    Ok(advance(board, action))
}

/// Places the mover's mark without checking the square.
///
/// Callers must pass an action enumerated by [`actions`] on the same board.
pub(crate) fn advance(board: &Board, action: Action) -> Board {
    debug_assert!(board.is_empty(action), "advance onto occupied square {action}");
    board.with(action, Square::Occupied(player(board)))
}
