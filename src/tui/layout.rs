//! Screen geometry: where the board sits and which cell a click hits.
//!
//! Pure arithmetic over the frame area, shared by rendering and mouse
//! handling so the two always agree.

use crate::games::extreme::Position;
use ratatui::layout::Rect;

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Thickness of the grid rules between cells.
pub const RULE: u16 = 1;
/// Total board width including rules.
pub const BOARD_WIDTH: u16 = 3 * CELL_WIDTH + 2 * RULE;
/// Total board height including rules.
pub const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT + 2 * RULE;

const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 3;

/// Regions of the game screen for a given frame area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Title band at the top.
    pub title: Rect,
    /// The 3x3 grid, centred between title and status.
    pub board: Rect,
    /// Status band at the bottom.
    pub status: Rect,
}

impl BoardLayout {
    /// Lays out the screen inside `area`.
    ///
    /// The board keeps its fixed size; on a tiny terminal it is clipped
    /// at draw time rather than squeezed.
    pub fn new(area: Rect) -> Self {
        let title = Rect::new(area.x, area.y, area.width, TITLE_HEIGHT.min(area.height));
        let status_y = area.bottom().saturating_sub(STATUS_HEIGHT).max(title.bottom());
        let status = Rect::new(area.x, status_y, area.width, area.bottom() - status_y);

        let middle_height = status.y - title.bottom();
        let board = Rect::new(
            area.x + area.width.saturating_sub(BOARD_WIDTH) / 2,
            title.bottom() + middle_height.saturating_sub(BOARD_HEIGHT) / 2,
            BOARD_WIDTH,
            BOARD_HEIGHT,
        );

        Self {
            title,
            board,
            status,
        }
    }

    /// Screen rectangle of a cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.board.x + pos.col() as u16 * (CELL_WIDTH + RULE),
            self.board.y + pos.row() as u16 * (CELL_HEIGHT + RULE),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Cell index under a terminal coordinate.
    ///
    /// Clicks on the grid rules or outside the board hit nothing.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let dx = column.checked_sub(self.board.x)?;
        let dy = row.checked_sub(self.board.y)?;
        if dx >= BOARD_WIDTH || dy >= BOARD_HEIGHT {
            return None;
        }

        let col = axis_cell(dx, CELL_WIDTH)?;
        let row = axis_cell(dy, CELL_HEIGHT)?;
        Position::from_row_col(row, col).map(Position::to_index)
    }
}

/// Which cell along one axis an offset falls in, or `None` on a rule.
fn axis_cell(offset: u16, cell: u16) -> Option<usize> {
    let stride = cell + RULE;
    if offset % stride >= cell {
        None
    } else {
        Some((offset / stride) as usize)
    }
}
