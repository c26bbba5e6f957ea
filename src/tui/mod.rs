//! Terminal front end: mouse and keyboard in, ratatui out.

mod input;
mod layout;
mod ui;
mod view;

pub use input::{map_event, move_cursor, InputAction};
pub use layout::{BoardLayout, BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH};
pub use view::TuiView;

use crate::config::GameConfig;
use crate::games::extreme::{GameEngine, Position};
use crate::scheduler::ResetTimer;
use crate::session::GameSession;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;
type TuiSession = GameSession<TuiView, ResetTimer>;

/// Runs the interactive game until the player quits.
#[instrument(skip_all, fields(reset_delay_ms = config.reset_delay_ms()))]
pub async fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting extreme tic-tac-toe TUI");

    let res = {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let engine = GameEngine::with_reset_delay(config.reset_delay());
        let mut session = GameSession::new(engine, TuiView::new(), ResetTimer::new());
        session.start();

        run_game_loop(&mut terminal, &mut session).await
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Raw mode, alternate screen and mouse capture. Restored on drop, whichever
/// way the game ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Draws, then waits for either the next terminal event or the pending reset.
async fn run_game_loop(terminal: &mut TuiTerminal, session: &mut TuiSession) -> Result<()> {
    let mut events = EventStream::new();
    let mut cursor = Position::Center;

    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, session.view(), cursor);
        })?;
        let layout = BoardLayout::new(area);

        let reset_at = session.scheduler().deadline();
        tokio::select! {
            maybe_event = events.next() => {
                let event = match maybe_event {
                    Some(event) => event?,
                    None => {
                        debug!("Event stream closed");
                        return Ok(());
                    }
                };

                match map_event(&event, cursor, &layout) {
                    Some(InputAction::Quit) => {
                        info!("User quit");
                        return Ok(());
                    }
                    Some(InputAction::MoveCursor(pos)) => cursor = pos,
                    Some(InputAction::Play(index)) => {
                        // Rejections are logged by the session; the screen stays as it is.
                        let _ = session.on_cell_clicked(index);
                    }
                    None => {}
                }
            }
            _ = wait_until(reset_at) => {
                if session.scheduler_mut().take_due(Instant::now()) {
                    session.fire_reset();
                }
            }
        }
    }
}

/// Sleeps until the deadline, or forever when nothing is pending.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_guard_leaves_raw_mode_off() {
        // Without a tty `enter` fails part way; either way nothing stays raw.
        if let Ok(guard) = TerminalGuard::enter() {
            drop(guard);
        }
        assert!(!is_raw_mode_enabled().unwrap_or(false));
    }
}
