//! Game rules for extreme tic-tac-toe.
//!
//! Pure functions over a board, kept apart from the engine so the
//! invariants and the front end can use them directly.

pub mod win;

pub use win::{check_winner, winning_line, LINES};
