//! Retained render model fed by the session.

use crate::games::extreme::{Board, Position};
use crate::session::BoardView;

/// What the terminal should show: the last snapshot, marked cells and status.
#[derive(Debug, Clone, Default)]
pub struct TuiView {
    board: Board,
    highlight: Option<[Position; 3]>,
    expiring: Vec<Position>,
    status: String,
}

impl TuiView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Winning line to highlight, if any.
    pub fn highlight(&self) -> Option<[Position; 3]> {
        self.highlight
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether a position is on the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlight.is_some_and(|line| line.contains(&pos))
    }

    /// Whether the mark at a position vanishes on its owner's next move.
    pub fn is_expiring(&self, pos: Position) -> bool {
        self.expiring.contains(&pos)
    }
}

impl BoardView for TuiView {
    fn redraw(&mut self, board: &Board) {
        self.board = board.clone();
    }

    fn highlight(&mut self, line: Option<[Position; 3]>) {
        self.highlight = line;
    }

    fn mark_expiring(&mut self, cells: &[Position]) {
        self.expiring = cells.to_vec();
    }

    fn show_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
