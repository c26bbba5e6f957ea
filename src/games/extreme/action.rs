//! Moves, rejections, and the effects of an accepted move.

use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the mark lands.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected. State is never touched on rejection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum MoveError {
    /// A line has been completed and the reset has not fired yet.
    #[display("Game is over, waiting for reset")]
    GameOver,

    /// Index outside 0-8.
    #[display("Cell index {} is off the board (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// Target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}

/// Request for the caller to run `reset()` once after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequest {
    /// How long to wait before resetting.
    pub delay: Duration,
}

/// Effects of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The placement that was accepted.
    pub action: Move,
    /// The mover's oldest mark, if it vanished.
    pub evicted: Option<Position>,
    /// Board after placement and eviction.
    pub board: Board,
    /// Status after the move.
    pub status: GameStatus,
    /// Text for the status line.
    pub message: String,
    /// Set exactly when this move won the game.
    pub reset: Option<ResetRequest>,
}
