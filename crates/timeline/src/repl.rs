//! Interactive session loop.
//!
//! The loop owns one [`GameHistory`] and is its only caller, so every
//! mutation is serialized by construction.

use crate::config::SessionConfig;
use crate::input::{Input, HELP};
use crate::render;
use crate::view::SessionView;
use std::io::{BufRead, Write};
use timeline_tictactoe::{GameError, GameHistory};
use tracing::{debug, info, instrument, warn};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep going.
    Show(String),
    /// Leave the loop.
    Quit,
}

/// A terminal game session.
#[derive(Debug, Clone)]
pub struct Repl {
    game: GameHistory,
    show_board_after_move: bool,
}

impl Repl {
    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            game: GameHistory::with_sort_order(*config.sort_order()),
            show_board_after_move: *config.show_board_after_move(),
        }
    }

    /// The session's game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// Returns the game error unchanged; the session is left as it was.
    #[instrument(skip(self))]
    pub fn execute(&mut self, input: Input) -> Result<Reply, GameError> {
        let text = match input {
            Input::Play(index) => {
                let ply = self.game.play_move(index)?;
                self.after_change(format!("Played ply {}.", ply))
            }
            Input::Jump(ply) => {
                self.game.jump_to(ply)?;
                self.after_change(format!("Jumped to ply {}.", ply))
            }
            Input::Sort => format!("Move list is now {}.", self.game.toggle_sort()),
            Input::Moves => render::moves(&self.game)?,
            Input::Board => render::board(&self.game),
            Input::Status => render::status(&self.game),
            Input::Json => {
                let view = SessionView::capture(&self.game)?;
                serde_json::to_string_pretty(&view).unwrap_or_else(|e| {
                    warn!(error = %e, "Cannot serialize session");
                    format!("error: {}", e)
                })
            }
            Input::Reset => {
                self.game.reset();
                self.after_change("New game.".to_string())
            }
            Input::Help => HELP.to_string(),
            Input::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Show(text))
    }

    fn after_change(&self, headline: String) -> String {
        if self.show_board_after_move {
            format!(
                "{}\n{}\n{}",
                headline,
                render::board(&self.game),
                render::status(&self.game)
            )
        } else {
            format!("{} {}", headline, render::status(&self.game))
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// Bad commands and rejected moves are reported and the loop goes on.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()> {
        info!("Session started");
        writeln!(output, "{}", render::board(&self.game))?;
        writeln!(output, "{}", render::status(&self.game))?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    debug!(error = %e, "Input line is not UTF-8");
                    writeln!(output, "error: input is not valid UTF-8 (type `help`)")?;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            let parsed = match line.parse::<Input>() {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!(error = %e, "Unparsed input");
                    writeln!(output, "error: {} (type `help`)", e)?;
                    continue;
                }
            };

            match self.execute(parsed) {
                Ok(Reply::Show(text)) => writeln!(output, "{}", text)?,
                Ok(Reply::Quit) => break,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
        }

        info!(plies = self.game.len(), "Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::{GameStatus, Mark, SortOrder};

    fn quiet() -> Repl {
        Repl::new(&SessionConfig::default().with_show_board_after_move(false))
    }

    #[test]
    fn test_execute_play_and_jump() {
        let mut repl = quiet();
        assert_eq!(
            repl.execute(Input::Play(4)),
            Ok(Reply::Show("Played ply 1. Next player: O".to_string()))
        );
        assert_eq!(
            repl.execute(Input::Jump(0)),
            Ok(Reply::Show(
                "Jumped to ply 0. Next player: X (viewing ply 0 of 1)".to_string()
            ))
        );
        assert_eq!(repl.game().status(), GameStatus::InProgress(Mark::X));
    }

    #[test]
    fn test_execute_propagates_errors() {
        let mut repl = quiet();
        assert_eq!(
            repl.execute(Input::Jump(3)),
            Err(GameError::OutOfRange { ply: 3, len: 1 })
        );
    }

    #[test]
    fn test_config_sets_initial_order() {
        let repl = Repl::new(&SessionConfig::default().with_sort_order(SortOrder::Descending));
        assert_eq!(repl.game().sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_quit() {
        assert_eq!(quiet().execute(Input::Quit), Ok(Reply::Quit));
    }
}
