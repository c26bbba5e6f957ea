//! Per-player FIFO of live marks.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of marks a player may have on the board.
pub const MAX_LIVE_MARKS: usize = 3;

/// Positions currently held by one player, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveQueue {
    pub(super) cells: VecDeque<Position>,
}

impl MoveQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            cells: VecDeque::with_capacity(MAX_LIVE_MARKS + 1),
        }
    }

    /// Records a new mark. Returns the evicted oldest mark once the
    /// queue would exceed [`MAX_LIVE_MARKS`].
    pub fn push(&mut self, pos: Position) -> Option<Position> {
        self.cells.push_back(pos);
        if self.cells.len() > MAX_LIVE_MARKS {
            self.cells.pop_front()
        } else {
            None
        }
    }

    /// The mark that will vanish on this player's next placement,
    /// if the queue is full.
    pub fn next_to_expire(&self) -> Option<Position> {
        if self.cells.len() == MAX_LIVE_MARKS {
            self.cells.front().copied()
        } else {
            None
        }
    }

    /// Whether the position is in this queue.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of live marks.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the player has no marks on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Removes every mark.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
