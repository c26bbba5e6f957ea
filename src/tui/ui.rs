//! Stateless rendering of the game screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::{BoardLayout, CELL_HEIGHT, CELL_WIDTH, RULE};
use super::view::TuiView;
use crate::games::extreme::{Player, Position, Square};

/// Renders the title, board and status line.
pub fn draw(frame: &mut Frame, view: &TuiView, cursor: Position) {
    let area = frame.area();
    let layout = BoardLayout::new(area);

    let title = Paragraph::new("Extreme Tic-Tac-Toe - three marks each, oldest vanishes")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_rules(frame, &layout, area);
    for pos in Position::ALL {
        let rect = layout.cell_rect(pos).intersection(area);
        if !rect.is_empty() {
            draw_cell(frame, rect, view, cursor, pos);
        }
    }

    let status = Paragraph::new(view.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &TuiView, cursor: Position, pos: Position) {
    let (symbol, base_style) = match view.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let base_style = if view.is_expiring(pos) {
        base_style.add_modifier(Modifier::DIM)
    } else {
        base_style
    };

    let style = if view.is_highlighted(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines: Vec<Line> = (0..CELL_HEIGHT)
        .map(|row| {
            let text = if row == CELL_HEIGHT / 2 { symbol.as_str() } else { "" };
            let text = format!("{:^width$}", text, width = CELL_WIDTH as usize);
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_rules(frame: &mut Frame, layout: &BoardLayout, area: Rect) {
    let rule_style = Style::default().fg(Color::DarkGray);
    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{segment}┼{segment}┼{segment}");

    for n in 1..3 {
        let y = layout.board.y + n * CELL_HEIGHT + (n - 1) * RULE;
        let rect = Rect::new(layout.board.x, y, layout.board.width, RULE).intersection(area);
        if !rect.is_empty() {
            frame.render_widget(Paragraph::new(horizontal.as_str()).style(rule_style), rect);
        }

        let x = layout.board.x + n * CELL_WIDTH + (n - 1) * RULE;
        for row in 0..3 {
            let y = layout.board.y + row * (CELL_HEIGHT + RULE);
            let rect = Rect::new(x, y, RULE, CELL_HEIGHT).intersection(area);
            if !rect.is_empty() {
                let bar = vec![Line::from("│"); CELL_HEIGHT as usize];
                frame.render_widget(Paragraph::new(bar).style(rule_style), rect);
            }
        }
    }
}
