//! Parsing of interactive commands.

use derive_more::{Display, Error};
use std::str::FromStr;
use timeline_tictactoe::Position;

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play at a cell index. Not range-checked here.
    Play(usize),
    /// Move the cursor to a ply.
    Jump(usize),
    /// Flip the move-list order.
    Sort,
    /// Show the move list.
    Moves,
    /// Show the board.
    Board,
    /// Show the status line.
    Status,
    /// Dump the session as JSON.
    Json,
    /// Start a new game.
    Reset,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

/// Input that is not a known command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse {:?}: {}", input, reason)]
pub struct InputError {
    /// The offending line.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl InputError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
commands:
  play <cell>   place the next mark (cell is 0-8 or a name like `center`)
  <cell>        same as play
  jump <ply>    move to an earlier or later ply
  sort          toggle move-list order
  moves         show the move list
  board         show the board
  status        show whose turn it is or the result
  json          dump the session as JSON
  reset         start a new game
  help          show this text
  quit          leave";

fn parse_cell(line: &str, arg: &str) -> Result<usize, InputError> {
    if let Ok(index) = arg.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(arg)
        .map(Position::to_index)
        .ok_or_else(|| InputError::new(line, "unknown cell"))
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        let no_args = |input: Input| {
            if rest.is_empty() {
                Ok(input)
            } else {
                Err(InputError::new(line, "unexpected argument"))
            }
        };

        match word.to_lowercase().as_str() {
            "" => Err(InputError::new(line, "empty input")),
            "play" | "p" if rest.is_empty() => Err(InputError::new(line, "missing cell")),
            "play" | "p" => parse_cell(line, rest).map(Input::Play),
            "jump" | "j" => rest
                .parse::<usize>()
                .map(Input::Jump)
                .map_err(|_| InputError::new(line, "expected a ply number")),
            "sort" => no_args(Input::Sort),
            "moves" | "history" => no_args(Input::Moves),
            "board" => no_args(Input::Board),
            "status" => no_args(Input::Status),
            "json" => no_args(Input::Json),
            "reset" | "new" => no_args(Input::Reset),
            "help" | "?" => no_args(Input::Help),
            "quit" | "exit" | "q" => no_args(Input::Quit),
            _ => parse_cell(line, trimmed).map(Input::Play),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_by_number_and_name() {
        assert_eq!("play 4".parse(), Ok(Input::Play(4)));
        assert_eq!("4".parse(), Ok(Input::Play(4)));
        assert_eq!("p top left".parse(), Ok(Input::Play(0)));
        assert_eq!("center".parse(), Ok(Input::Play(4)));
    }

    #[test]
    fn test_out_of_range_cell_is_passed_through() {
        assert_eq!("play 12".parse(), Ok(Input::Play(12)));
    }

    #[test]
    fn test_keywords() {
        assert_eq!("JUMP 3".parse(), Ok(Input::Jump(3)));
        assert_eq!(" sort ".parse(), Ok(Input::Sort));
        assert_eq!("quit".parse(), Ok(Input::Quit));
        assert_eq!("moves".parse(), Ok(Input::Moves));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("".parse::<Input>().is_err());
        assert!("jump".parse::<Input>().is_err());
        assert!("jump back".parse::<Input>().is_err());
        assert!("sort now".parse::<Input>().is_err());
        assert!("play".parse::<Input>().is_err());
        assert!("dance".parse::<Input>().is_err());
    }
}
