//! Unpruned minimax, the reference the pruned search must agree with.

use crate::rules::moves::advance;
use crate::rules::{Utility, actions, player, terminal, utility};
use crate::types::{Board, Player};
use tracing::instrument;

/// Computes the true minimax value of `board` by visiting every line of play.
///
/// Much slower than [`AlphaBeta`](super::AlphaBeta) from an early position.
#[instrument(level = "debug", skip(board))]
pub fn exhaustive_value(board: &Board) -> Utility {
    value_of(board)
}

fn value_of(board: &Board) -> Utility {
    if terminal(board) {
        return utility(board);
    }

    let children = actions(board)
        .into_iter()
        .map(|action| value_of(&advance(board, action)));

    let best = match player(board) {
        Player::X => children.max(),
        Player::O => children.min(),
    };
    // A board that is not terminal always has an empty square.
    best.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_win_for_x() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(exhaustive_value(&board), 1);
    }

    #[test]
    fn test_o_to_move_wins() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        assert_eq!(exhaustive_value(&board), -1);
    }

    #[test]
    fn test_terminal_board_scores_itself() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(exhaustive_value(&board), 0);
    }
}
