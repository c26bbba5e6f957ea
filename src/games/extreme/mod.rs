//! Extreme tic-tac-toe: at most three live marks per player.

mod action;
mod engine;
pub mod invariants;
mod move_queue;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome, ResetRequest};
pub use engine::{GameEngine, DEFAULT_RESET_DELAY, STARTING_PLAYER};
pub use move_queue::{MoveQueue, MAX_LIVE_MARKS};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
