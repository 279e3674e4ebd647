//! Tic-tac-toe with branching move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] value (apply a move, find
//!   the winning line, detect a draw).
//! - **History**: [`GameHistory`] owns every snapshot of a session and a
//!   cursor into them. Playing from a past cursor discards the abandoned
//!   future; jumping only moves the cursor.
//! - **Invariants**: properties of a history, checked after every move in
//!   debug builds.
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameHistory, GameStatus, Mark};
//!
//! let mut game = GameHistory::new();
//! for index in [0, 1, 3, 4, 6] {
//!     game.play_move(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//!
//! game.jump_to(2)?;
//! game.play_move(8)?;
//! assert_eq!(game.len(), 4);
//! # Ok::<(), timeline_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod label;
mod position;
pub mod rules;
mod types;

pub use error::{GameError, InvalidReason};
pub use history::{GameHistory, Snapshot, SortOrder};
pub use label::{MoveEntry, MoveLabel};
pub use position::Position;
pub use rules::{Line, LINES};
pub use types::{Board, Cell, GameStatus, Mark};
