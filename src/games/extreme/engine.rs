//! The extreme tic-tac-toe state machine.
//!
//! Each player keeps at most three marks on the board. Placing a fourth
//! removes that player's oldest mark before the board is checked for a
//! win, so the board can never fill up and there is no draw.

use super::action::{Move, MoveError, MoveOutcome, ResetRequest};
use super::invariants::{EngineInvariants, InvariantSet};
use super::move_queue::MoveQueue;
use super::{rules, Board, GameStatus, Player, Position, Square};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Delay before a finished game resets, unless configured otherwise.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1500);

/// Player who moves first after every reset.
pub const STARTING_PLAYER: Player = Player::X;

/// Game engine owning the board, both move queues, the turn and the status.
///
/// All mutation goes through [`GameEngine::apply_move`] and
/// [`GameEngine::reset`]. The engine never sleeps or spawns timers: a win
/// hands the caller a [`ResetRequest`] and the caller decides when to call
/// `reset`.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) queue_x: MoveQueue,
    pub(super) queue_o: MoveQueue,
    pub(super) to_move: Player,
    pub(super) status: GameStatus,
    reset_delay: Duration,
}

impl GameEngine {
    /// Creates an engine in the reset state with the default delay.
    #[instrument]
    pub fn new() -> Self {
        Self::with_reset_delay(DEFAULT_RESET_DELAY)
    }

    /// Creates an engine that asks for resets after `reset_delay`.
    #[instrument]
    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            board: Board::new(),
            queue_x: MoveQueue::new(),
            queue_o: MoveQueue::new(),
            to_move: STARTING_PLAYER,
            status: GameStatus::InProgress,
            reset_delay,
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Checks, in order: the game is still in progress, the index is on the
    /// board, the cell is empty. The first failing check rejects the move
    /// and leaves every piece of state untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.status != GameStatus::InProgress {
            debug!("Rejected: game over");
            return Err(MoveError::GameOver);
        }

        let Some(position) = Position::from_index(index) else {
            debug!("Rejected: out of bounds");
            return Err(MoveError::OutOfBounds(index));
        };

        if !self.board.is_empty(position) {
            debug!(%position, "Rejected: cell occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.to_move;
        self.board.set(position, Square::Occupied(player));
        let evicted = self.queue_mut(player).push(position);
        if let Some(old) = evicted {
            debug!(%old, "Oldest mark vanished");
            self.board.set(old, Square::Empty);
        }

        let reset = match rules::check_winner(&self.board) {
            Some(winner) => {
                info!(%winner, "Line completed");
                self.status = GameStatus::Won(winner);
                Some(ResetRequest {
                    delay: self.reset_delay,
                })
            }
            None => {
                self.to_move = player.opponent();
                None
            }
        };

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated: {:?}",
            EngineInvariants::check_all(self)
        );

        Ok(MoveOutcome {
            action: Move::new(player, position),
            evicted,
            board: self.board.clone(),
            status: self.status,
            message: self.status_text(),
            reset,
        })
    }

    /// Clears the board and both queues; X to move, game in progress.
    ///
    /// Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.queue_x.clear();
        self.queue_o.clear();
        self.to_move = STARTING_PLAYER;
        self.status = GameStatus::InProgress;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. After a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player's live marks, oldest first.
    pub fn queue(&self, player: Player) -> &MoveQueue {
        match player {
            Player::X => &self.queue_x,
            Player::O => &self.queue_o,
        }
    }

    fn queue_mut(&mut self, player: Player) -> &mut MoveQueue {
        match player {
            Player::X => &mut self.queue_x,
            Player::O => &mut self.queue_o,
        }
    }

    /// The completed line, once the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Delay handed out with every reset request.
    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Status line: whose turn it is, or who won.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn to go!", self.to_move),
            GameStatus::Won(winner) => format!("{} wins! Resetting...", winner),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
