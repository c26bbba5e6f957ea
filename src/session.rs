//! Glue between input, the engine, the view and the reset scheduler.

use crate::games::extreme::{Board, GameEngine, GameStatus, MoveError, Player, Position};
use crate::scheduler::ResetScheduler;
use tracing::{debug, info, instrument};

/// Output side of the game: whatever draws the board and the status line.
pub trait BoardView {
    /// Redraws every mark from a full snapshot.
    fn redraw(&mut self, board: &Board);

    /// Marks the completed line, or clears the mark with `None`.
    fn highlight(&mut self, _line: Option<[Position; 3]>) {}

    /// Marks the cells whose marks vanish on their owner's next placement.
    fn mark_expiring(&mut self, _cells: &[Position]) {}

    /// Replaces the status line.
    fn show_status(&mut self, status: &str);
}

/// One interactive session: an engine plus its collaborators.
#[derive(Debug)]
pub struct GameSession<V, S> {
    engine: GameEngine,
    view: V,
    scheduler: S,
}

impl<V: BoardView, S: ResetScheduler> GameSession<V, S> {
    /// Creates a session around an engine.
    pub fn new(engine: GameEngine, view: V, scheduler: S) -> Self {
        Self {
            engine,
            view,
            scheduler,
        }
    }

    /// Draws the initial board and turn.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        info!("Session started");
        self.refresh();
    }

    /// Handles a click already resolved to a cell index.
    ///
    /// Rejections leave the engine and the view untouched.
    #[instrument(skip(self))]
    pub fn on_cell_clicked(&mut self, index: usize) -> Result<(), MoveError> {
        let outcome = self.engine.apply_move(index).inspect_err(|e| {
            debug!(error = %e, "Click ignored");
        })?;

        debug!(action = %outcome.action, evicted = ?outcome.evicted, "Move applied");
        self.view.redraw(&outcome.board);
        self.view.mark_expiring(&self.expiring());
        self.view.show_status(&outcome.message);

        if let Some(request) = outcome.reset {
            info!(delay = ?request.delay, "Scheduling reset");
            self.view.highlight(self.engine.winning_line());
            self.scheduler.schedule_reset(request.delay);
        }

        Ok(())
    }

    /// Runs the reset the scheduler was asked for.
    #[instrument(skip(self))]
    pub fn fire_reset(&mut self) {
        self.engine.reset();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view.highlight(None);
        self.view.redraw(self.engine.board());
        self.view.mark_expiring(&self.expiring());
        self.view.show_status(&self.engine.status_text());
    }

    /// Each player's oldest mark once their queue is full; nothing after a win.
    fn expiring(&self) -> Vec<Position> {
        if self.engine.status() != GameStatus::InProgress {
            return Vec::new();
        }
        [Player::X, Player::O]
            .into_iter()
            .filter_map(|player| self.engine.queue(player).next_to_expire())
            .collect()
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler mutably, for the loop that polls it.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
