//! Translating terminal events into game input.

use super::layout::BoardLayout;
use crate::games::extreme::Position;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a terminal event asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Place a mark at this cell index.
    Play(usize),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Leave the game.
    Quit,
}

/// Maps a terminal event to an action. Events that mean nothing to the
/// game (key releases, clicks off the grid, resizes) map to `None`.
pub fn map_event(event: &Event, cursor: Position, layout: &BoardLayout) -> Option<InputAction> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => layout.cell_at(*column, *row).map(InputAction::Play),
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, cursor),
        _ => None,
    }
}

fn map_key(key: &KeyEvent, cursor: Position) -> Option<InputAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        KeyCode::Char(c @ '1'..='9') => Some(InputAction::Play(c as usize - '1' as usize)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Play(cursor.to_index())),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(InputAction::MoveCursor(move_cursor(cursor, key.code)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn layout() -> BoardLayout {
        BoardLayout::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_digits_map_to_zero_based_cells() {
        assert_eq!(
            map_event(&press(KeyCode::Char('1')), Position::Center, &layout()),
            Some(InputAction::Play(0))
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('9')), Position::Center, &layout()),
            Some(InputAction::Play(8))
        );
        assert_eq!(map_event(&press(KeyCode::Char('0')), Position::Center, &layout()), None);
    }

    #[test]
    fn test_enter_plays_cursor() {
        assert_eq!(
            map_event(&press(KeyCode::Enter), Position::BottomLeft, &layout()),
            Some(InputAction::Play(6))
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_left_click_on_cell_plays_it() {
        let layout = layout();
        let rect = layout.cell_rect(Position::MiddleRight);
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&click, Position::Center, &layout), Some(InputAction::Play(5)));
    }

    #[test]
    fn test_right_click_ignored() {
        let layout = layout();
        let rect = layout.cell_rect(Position::Center);
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: rect.x,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&click, Position::Center, &layout), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_event(&press(KeyCode::Char('q')), Position::Center, &layout()),
            Some(InputAction::Quit)
        );
        assert_eq!(
            map_event(&press(KeyCode::Esc), Position::Center, &layout()),
            Some(InputAction::Quit)
        );
    }
}
