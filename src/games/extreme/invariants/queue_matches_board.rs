//! Queue/board agreement invariant.

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: every queued cell holds its owner's mark, and no cell is
/// queued for both players.
pub struct QueueMatchesBoardInvariant;

impl Invariant<GameEngine> for QueueMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let marks_match = [Player::X, Player::O].into_iter().all(|player| {
            engine
                .queue(player)
                .iter()
                .all(|pos| board.get(pos) == Square::Occupied(player))
        });
        let disjoint = engine
            .queue(Player::X)
            .iter()
            .all(|pos| !engine.queue(Player::O).contains(pos));

        marks_match && disjoint
    }

    fn description() -> &'static str {
        "Queued cells hold their owner's mark and queues are disjoint"
    }
}
