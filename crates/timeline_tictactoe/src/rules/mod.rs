//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) value. Nothing here holds
//! state; the history manager composes these into a session.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal};
pub use moves::{apply_move, changed_cell};
pub use win::{find_winning_line, winner, Line, LINES};
