//! Routes presentation events into the session and keeps the surface in step.
//!
//! The controller is the only owner of the [`GameSession`]. In computer mode
//! a human move that hands the turn to O schedules one [`ReplyTicket`]; the
//! reply is applied when the owner passes the ticket back to
//! [`GameController::computer_turn`]. Tickets from before a reset carry an
//! old epoch and are dropped.

use crate::mode::GameMode;
use crate::opponent::ComputerOpponent;
use crate::position::Position;
use crate::rules::Outcome;
use crate::schedule::{ReplyTicket, Scheduler};
use crate::session::{GameSession, MoveReport};
use crate::surface::{Surface, UiEvent};
use crate::types::Player;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default pause before the computer answers, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 500;

/// Default pause before the computer answers.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(DEFAULT_REPLY_DELAY_MS);

/// Game controller, generic over its presentation surface and scheduler.
#[derive(Debug)]
pub struct GameController<S, D> {
    session: GameSession,
    opponent: ComputerOpponent,
    surface: S,
    scheduler: D,
    reply_delay: Duration,
}

impl<S: Surface, D: Scheduler> GameController<S, D> {
    /// Creates a controller around an idle session.
    ///
    /// Call [`GameController::start`] before feeding events.
    pub fn new(surface: S, scheduler: D, opponent: ComputerOpponent) -> Self {
        Self {
            session: GameSession::default(),
            opponent,
            surface,
            scheduler,
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }

    /// Sets the pause before computer replies.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// The session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The presentation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &D {
        &self.scheduler
    }

    /// Mutable scheduler, for owners that poll it.
    pub fn scheduler_mut(&mut self) -> &mut D {
        &mut self.scheduler
    }

    /// Starts the first game in `mode`.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) {
        info!("Starting game controller");
        self.select_mode(mode);
    }

    /// Handles one presentation event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::CellClicked(index) => self.click(index),
            UiEvent::ModeSelected(mode) => self.select_mode(mode),
            UiEvent::ResetPressed => self.reset(),
        }
    }

    /// Plays the computer's move for a delivered ticket.
    ///
    /// Returns `false` when the ticket is stale or it is not the computer's
    /// turn.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self, ticket: ReplyTicket) -> bool {
        if ticket.epoch != self.session.epoch() {
            debug!(current = self.session.epoch(), "Dropping stale reply");
            return false;
        }
        if !self.session.is_computers_turn() {
            debug!("Not the computer's turn");
            return false;
        }

        let symbol = self.session.current_player();
        let Some(choice) = self.opponent.choose(self.session.board(), symbol) else {
            return false;
        };
        let report = self
            .session
            .apply_move_as(symbol, choice.position().index());
        self.present(report);
        report.is_applied()
    }

    #[instrument(skip(self))]
    fn click(&mut self, index: usize) {
        let player = self.human_to_move();
        let report = self.session.apply_move_as(player, index);
        self.present(report);

        if report.is_applied() && self.session.is_computers_turn() {
            let ticket = ReplyTicket::new(self.session.epoch());
            debug!(?ticket, delay = ?self.reply_delay, "Scheduling computer reply");
            self.scheduler.schedule(ticket, self.reply_delay);
        }
    }

    fn select_mode(&mut self, mode: GameMode) {
        self.scheduler.cancel_pending();
        self.session.set_mode(mode);
        self.surface.show_mode(mode);
        self.redraw_empty();
    }

    fn reset(&mut self) {
        self.scheduler.cancel_pending();
        self.session.reset();
        self.redraw_empty();
    }

    /// Mark a click plays as. In computer mode the human is always X, so a
    /// click during O's turn fails the turn check.
    fn human_to_move(&self) -> Player {
        match self.session.mode() {
            GameMode::HumanVsHuman => self.session.current_player(),
            GameMode::HumanVsComputer => GameMode::HUMAN,
        }
    }

    fn present(&mut self, report: MoveReport) {
        let MoveReport::Applied {
            player,
            position,
            outcome,
        } = report
        else {
            return;
        };
        self.surface.render(position, player);
        if let Outcome::Won { line, .. } = outcome {
            self.surface.highlight(line);
        }
        self.surface.set_status(&self.session.status_text());
    }

    fn redraw_empty(&mut self) {
        for position in Position::ALL {
            self.surface.clear(position);
        }
        self.surface.set_status(&self.session.status_text());
    }
}
