//! Error types for the board model.

use crate::action::Action;
use crate::types::Player;
use derive_more::{Display, Error};

/// Raised by [`result`](crate::result) when the targeted square is already taken.
///
/// This is a caller contract violation: actions should always be drawn from
/// [`actions`](crate::actions) on the same board.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid move: {} is already occupied by {} (at {}:{})", action, occupant, file, line)]
pub struct InvalidMoveError {
    /// The rejected action.
    pub action: Action,
    /// The mark already sitting on that square.
    pub occupant: Player,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl InvalidMoveError {
    /// Creates a new invalid move error with caller location tracking.
    #[track_caller]
    pub fn new(action: Action, occupant: Player) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            action,
            occupant,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// What went wrong while building a board or an action from user input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// A board description did not contain exactly nine cells.
    #[display("expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A board description contained a character that is not a cell.
    #[display("unexpected character {:?}", _0)]
    UnexpectedChar(char),

    /// A row or column was outside `0..=2`.
    #[display("coordinate ({}, {}) is outside the 3x3 grid", _0, _1)]
    CoordinateOutOfRange(usize, usize),

    /// Text could not be understood as an action.
    #[display("unrecognized action {:?}", _0)]
    UnrecognizedAction(String),
}

/// Board or action construction error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// The specific failure.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the specific failure.
    pub fn kind(&self) -> &BoardErrorKind {
        &self.kind
    }
}
