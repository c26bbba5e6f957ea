//! Every mark on the board is accounted for by a queue.

use super::super::{GameEngine, Player, Position, Square};
use super::Invariant;

/// Invariant: each occupied cell appears in its owner's queue.
///
/// Together with [`super::QueueMatchesBoardInvariant`] this makes the board
/// and the queues two views of the same set of marks.
pub struct MarksTrackedInvariant;

impl Invariant<GameEngine> for MarksTrackedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Position::ALL.into_iter().all(|pos| match engine.board().get(pos) {
            Square::Empty => true,
            Square::Occupied(player) => engine.queue(player).contains(pos),
        }) && [Player::X, Player::O]
            .into_iter()
            .all(|player| engine.board().count(player) == engine.queue(player).len())
    }

    fn description() -> &'static str {
        "Every mark on the board is tracked by its owner's queue"
    }
}
