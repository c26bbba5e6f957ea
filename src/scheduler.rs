//! Delayed-reset scheduling.

use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

/// Capability to run the game reset once, some time from now.
///
/// Requests are one-shot and cannot be cancelled.
pub trait ResetScheduler {
    /// Arranges for the reset to run after `delay`.
    fn schedule_reset(&mut self, delay: Duration);
}

/// One-shot deadline polled by an event loop.
#[derive(Debug, Clone, Default)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// When the pending reset is due, if one is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a reset is pending and its deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Disarms and returns true if the reset is due at `now`.
    #[instrument(skip(self))]
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            debug!("Reset timer fired");
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

impl ResetScheduler for ResetTimer {
    #[instrument(skip(self))]
    fn schedule_reset(&mut self, delay: Duration) {
        if self.deadline.is_some() {
            warn!("Reset already pending, re-arming");
        }
        self.deadline = Some(Instant::now() + delay);
    }
}
