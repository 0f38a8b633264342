//! Game-over detection and scoring.

use super::win::winner;
use crate::types::{Board, Outcome, Player};
use tracing::instrument;

/// Score of a finished game from X's point of view: `1`, `0` or `-1`.
pub type Utility = i8;

/// Returns true if the game is over: someone has three in a row or the
/// board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    board.is_full() || winner(board).is_some()
}

/// Returns `1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Only meaningful on a [`terminal`] board; an unfinished board scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Returns how the game ended, or `None` while it is still in progress.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        Some(Outcome::Winner(player))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert!(!terminal(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_full_board_is_draw() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), 0);
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_before_full_is_terminal() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), 1);
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_o_win_scores_negative() {
        let board: Board = "XX./OOO/X..".parse().unwrap();
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_unfinished_board_scores_zero() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert!(!terminal(&board));
        assert_eq!(utility(&board), 0);
    }
}
