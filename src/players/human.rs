//! Human contestant reading moves from a line-based terminal.

use super::Contestant;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_tictactoe::{Action, Board, Player, evaluate_actions, player};
use tracing::{debug, warn};

/// Human player typing moves on `input` and reading prompts on `output`.
pub struct HumanContestant<R, W> {
    name: String,
    input: R,
    output: W,
    show_hints: bool,
}

impl<R: BufRead, W: Write> HumanContestant<R, W> {
    /// Creates a new human contestant.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            show_hints: false,
        }
    }

    /// Shows the value of every legal move before each prompt.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    fn write_hints(&mut self, board: &Board) -> Result<()> {
        let mover = player(board);
        writeln!(self.output, "Move values:")?;
        for hint in evaluate_actions(board) {
            let verdict = match (hint.value, mover) {
                (0, _) => "draw",
                (1, Player::X) | (-1, Player::O) => "win",
                _ => "loss",
            };
            writeln!(self.output, "  {} {:<13} {}", hint.action, hint.action.label(), verdict)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Contestant for HumanContestant<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        if self.show_hints {
            self.write_hints(board)?;
        }

        loop {
            write!(
                self.output,
                "{} ({}) move [row,col | 1-9 | label]: ",
                self.name,
                player(board)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed");
            }

            match Action::parse(&line) {
                Ok(action) if board.is_empty(action) => {
                    debug!(human = %self.name, %action, "Human chose action");
                    return Ok(action);
                }
                Ok(action) => {
                    warn!(%action, "Square already taken");
                    writeln!(self.output, "{} is already taken.", action.label())?;
                }
                Err(e) => {
                    warn!(error = %e, "Unparsable move");
                    writeln!(self.output, "Could not understand {:?}.", line.trim())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_legal() {
        let board: Board = "X........".parse().unwrap();
        let input = Cursor::new("nonsense\n1\ncenter\n");
        let mut output = Vec::new();
        let action = HumanContestant::new("Ada", input, &mut output)
            .choose(&board)
            .unwrap();
        assert_eq!(action, Action::new(1, 1).unwrap());

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Could not understand \"nonsense\""));
        assert!(transcript.contains("top-left is already taken"));
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut output = Vec::new();
        let mut human = HumanContestant::new("Ada", Cursor::new(""), &mut output);
        assert!(human.choose(&Board::new()).is_err());
    }

    #[test]
    fn test_hints_list_every_move() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let mut output = Vec::new();
        HumanContestant::new("Ada", Cursor::new("3\n"), &mut output)
            .with_hints(true)
            .choose(&board)
            .unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("(0, 2) top-right     win"));
        assert_eq!(transcript.matches("  (").count(), 5);
    }
}
