//! Strictly Extreme - extreme tic-tac-toe
//!
//! Two players, one 3x3 grid, and at most three live marks each: placing a
//! fourth mark removes that player's oldest one. Three in a row wins and the
//! game resets itself after a short delay.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`], a synchronous state machine with
//!   `apply_move` and `reset`
//! - **Session**: [`GameSession`] forwards clicks to the engine, snapshots to
//!   a [`BoardView`] and reset requests to a [`ResetScheduler`]
//! - **TUI**: ratatui/crossterm front end with mouse support
//!
//! # Example
//!
//! ```
//! use strictly_extreme::{GameEngine, GameStatus, MoveError, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 3, 4] {
//!     engine.apply_move(index).unwrap();
//! }
//! let outcome = engine.apply_move(6).unwrap();
//! assert_eq!(outcome.status, GameStatus::Won(Player::X));
//! assert_eq!(engine.apply_move(8), Err(MoveError::GameOver));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod scheduler;
mod script;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use games::extreme::{
    invariants, rules, Board, GameEngine, GameStatus, Move, MoveError, MoveOutcome, MoveQueue,
    Player, Position, ResetRequest, Square, DEFAULT_RESET_DELAY, MAX_LIVE_MARKS, STARTING_PLAYER,
};

// Crate-level exports - Session and collaborators
pub use scheduler::{ResetScheduler, ResetTimer};
pub use session::{BoardView, GameSession};

// Crate-level exports - Headless play
pub use script::{run_script, ScriptStep};

// Crate-level exports - Terminal front end
pub use tui::{
    map_event, move_cursor, run_tui, BoardLayout, InputAction, TuiView, BOARD_HEIGHT,
    BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH,
};
