//! Board coordinates that a move targets.

use crate::error::{BoardError, BoardErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move target: a (row, column) pair, each in `0..=2`.
///
/// Actions only mean something relative to the board they were enumerated
/// from; [`actions`](crate::actions) yields the legal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    row: u8,
    col: u8,
}

const LABELS: [&str; 9] = [
    "top-left",
    "top-center",
    "top-right",
    "middle-left",
    "center",
    "middle-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

impl Action {
    /// All nine squares in row-major order.
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Creates an action from a row and a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardErrorKind::CoordinateOutOfRange`] if either coordinate
    /// is greater than 2.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row > 2 || col > 2 {
            return Err(BoardError::new(BoardErrorKind::CoordinateOutOfRange(row, col)));
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates an action from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Row, from the top.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, from the left.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Human readable name of the square.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Parses user input into an action.
    ///
    /// Accepts `"row,col"` or `"row col"` (zero based), a keypad digit `1`-`9`
    /// in reading order, or a square label such as `"center"` (any case).
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, BoardError> {
        let trimmed = input.trim();
        let unrecognized =
            || BoardError::new(BoardErrorKind::UnrecognizedAction(trimmed.to_string()));

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse::<usize>().map_err(|_| unrecognized())?;
                let col = col.parse::<usize>().map_err(|_| unrecognized())?;
                Self::new(row, col)
            }
            [single] => {
                if let Ok(digit) = single.parse::<usize>() {
                    return digit
                        .checked_sub(1)
                        .and_then(Self::from_index)
                        .ok_or_else(unrecognized);
                }
                let lower = single.to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|action| action.label() == lower)
                    .ok_or_else(unrecognized)
            }
            _ => Err(unrecognized()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), index);
            assert_eq!(Action::from_index(index), Some(*action));
        }
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = Action::new(3, 0).unwrap_err();
        assert_eq!(err.kind(), &BoardErrorKind::CoordinateOutOfRange(3, 0));
        assert!(Action::new(1, 3).is_err());
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(Action::parse("2,1").unwrap(), Action::new(2, 1).unwrap());
        assert_eq!(Action::parse(" 0 2 ").unwrap(), Action::new(0, 2).unwrap());
    }

    #[test]
    fn test_parse_keypad_digit() {
        assert_eq!(Action::parse("1").unwrap(), Action::new(0, 0).unwrap());
        assert_eq!(Action::parse("9").unwrap(), Action::new(2, 2).unwrap());
        assert!(Action::parse("0").is_err());
        assert!(Action::parse("10").is_err());
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(Action::parse("Center").unwrap(), Action::new(1, 1).unwrap());
        assert_eq!(
            Action::parse("bottom-left").unwrap(),
            Action::new(2, 0).unwrap()
        );
        assert!(Action::parse("somewhere").is_err());
    }
}
