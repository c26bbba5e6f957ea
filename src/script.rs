//! Headless play: apply a list of cell indices without a terminal.

use crate::games::extreme::{GameEngine, MoveError, MoveOutcome};
use crate::scheduler::ResetScheduler;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};

/// One line of a scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// The move was accepted.
    Accepted {
        /// Requested cell index.
        index: usize,
        /// Effects of the move.
        outcome: MoveOutcome,
    },
    /// The move was rejected; nothing changed.
    Rejected {
        /// Requested cell index.
        index: usize,
        /// Why.
        error: MoveError,
    },
    /// A pending reset fired before the next move.
    Reset,
}

impl std::fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptStep::Accepted { outcome, .. } => {
                write!(f, "{}", outcome.action)?;
                if let Some(evicted) = outcome.evicted {
                    write!(f, " ({} vanishes)", evicted)?;
                }
                write!(f, ": {}", outcome.message)
            }
            ScriptStep::Rejected { index, error } => {
                write!(f, "cell {}: rejected, {}", index, error)
            }
            ScriptStep::Reset => write!(f, "reset"),
        }
    }
}

/// Scheduler for scripted play: a requested reset waits for the next move.
#[derive(Debug, Default)]
struct PendingReset {
    delay: Option<Duration>,
}

impl PendingReset {
    fn take(&mut self) -> Option<Duration> {
        self.delay.take()
    }
}

impl ResetScheduler for PendingReset {
    fn schedule_reset(&mut self, delay: Duration) {
        self.delay = Some(delay);
    }
}

/// Plays `moves` in order.
///
/// With `auto_reset`, a reset requested by a win fires just before the next
/// move, as if its delay had elapsed. Without it, every later move is
/// rejected with [`MoveError::GameOver`].
#[instrument(skip(engine))]
pub fn run_script(engine: &mut GameEngine, moves: &[usize], auto_reset: bool) -> Vec<ScriptStep> {
    let mut scheduler = PendingReset::default();
    let mut steps = Vec::with_capacity(moves.len());

    for &index in moves {
        if auto_reset && scheduler.take().is_some() {
            engine.reset();
            steps.push(ScriptStep::Reset);
        }

        match engine.apply_move(index) {
            Ok(outcome) => {
                if let Some(request) = outcome.reset {
                    scheduler.schedule_reset(request.delay);
                }
                steps.push(ScriptStep::Accepted { index, outcome });
            }
            Err(error) => steps.push(ScriptStep::Rejected { index, error }),
        }
    }

    info!(steps = steps.len(), "Script finished");
    steps
}
