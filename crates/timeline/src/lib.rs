//! Timeline library - terminal front-end for tic-tac-toe with time travel.
//!
//! Drives a [`timeline_tictactoe::GameHistory`] from text commands.
//!
//! # Architecture
//!
//! - **Config**: TOML session preferences, overridable from the command line
//! - **Input**: parsing of interactive commands
//! - **Render**: stateless text rendering of board, status and move list
//! - **Repl**: the session loop that owns the game
//! - **View**: JSON snapshot of a session
//!
//! # Example
//!
//! ```
//! use timeline::{Input, Repl, Reply, SessionConfig};
//!
//! let mut repl = Repl::new(&SessionConfig::default());
//! repl.execute(Input::Play(4))?;
//! assert_eq!(repl.execute(Input::Quit)?, Reply::Quit);
//! # Ok::<(), timeline_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
pub mod render;
mod repl;
mod view;

pub use cli::{Cli, Command};
pub use config::{ConfigError, SessionConfig};
pub use input::{Input, InputError, HELP};
pub use repl::{Reply, Repl};
pub use view::SessionView;
