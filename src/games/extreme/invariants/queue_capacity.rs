//! Queue capacity invariant: nobody has more than three live marks.

use super::super::move_queue::MAX_LIVE_MARKS;
use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: each move queue holds at most [`MAX_LIVE_MARKS`] cells.
pub struct QueueCapacityInvariant;

impl Invariant<GameEngine> for QueueCapacityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        [Player::X, Player::O]
            .into_iter()
            .all(|player| engine.queue(player).len() <= MAX_LIVE_MARKS)
    }

    fn description() -> &'static str {
        "Each player has at most 3 live marks"
    }
}
