//! Tests for the tic-tac-toe board model.

use std::collections::{HashSet, VecDeque};
use strictly_tictactoe::{
    Action, Board, Player, Square, actions, initial_state, player, result, terminal, utility,
    winner,
};

/// Every board reachable from the empty board by legal play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([initial_state()]);
    seen.insert(initial_state());

    while let Some(board) = queue.pop_front() {
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen.into_iter().collect()
}

fn occupied(board: &Board) -> usize {
    board.squares().iter().filter(|s| **s != Square::Empty).count()
}

#[test]
fn test_reachable_board_count() {
    // Well-known number of legal tic-tac-toe positions.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_actions_plus_marks_is_nine() {
    for board in reachable_boards() {
        assert_eq!(actions(&board).len() + occupied(&board), 9, "{board}");
    }
}

#[test]
fn test_actions_are_row_major() {
    for board in reachable_boards() {
        let actions = actions(&board);
        assert!(actions.windows(2).all(|w| w[0].index() < w[1].index()));
    }
}

#[test]
fn test_result_changes_exactly_one_square() {
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let mover = player(&board);
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            let changed: Vec<usize> = (0..9)
                .filter(|&i| board.squares()[i] != next.squares()[i])
                .collect();
            assert_eq!(changed, vec![action.index()]);
            assert_eq!(next.get(action), Square::Occupied(mover));
        }
    }
}

#[test]
fn test_result_rejects_every_occupied_square() {
    for board in reachable_boards() {
        for action in Action::ALL.iter().copied().filter(|a| !board.is_empty(*a)) {
            let err = result(&board, action).unwrap_err();
            assert_eq!(err.action, action);
            assert_eq!(Square::Occupied(err.occupant), board.get(action));
        }
    }
}

#[test]
fn test_mark_counts_stay_balanced() {
    for board in reachable_boards() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "{board}");
    }
}

#[test]
fn test_utility_matches_winner() {
    for board in reachable_boards().into_iter().filter(terminal) {
        let score = utility(&board);
        assert!((-1..=1).contains(&score));
        assert_eq!(score == 1, winner(&board) == Some(Player::X));
        assert_eq!(score == -1, winner(&board) == Some(Player::O));
    }
}

#[test]
fn test_turn_alternates_from_empty_board() {
    let board = initial_state();
    assert_eq!(player(&board), Player::X);

    let board = result(&board, Action::new(0, 0).unwrap()).unwrap();
    assert_eq!(player(&board), Player::O);
}

#[test]
fn test_last_square_fills_to_draw() {
    let board = Board::from_rows([
        [Some(Player::X), Some(Player::O), Some(Player::X)],
        [Some(Player::X), Some(Player::O), Some(Player::O)],
        [Some(Player::O), Some(Player::X), None],
    ]);
    assert!(!terminal(&board));
    let last = Action::new(2, 2).unwrap();
    assert_eq!(actions(&board), vec![last]);

    let board = result(&board, last).unwrap();
    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
}
