//! Application state and logic.

use super::input::{KeyAction, map_key};
use super::scheduler::TokioScheduler;
use super::surface::TerminalSurface;
use crate::config::AppConfig;
use crossterm::event::KeyCode;
use noughts_core::{ComputerOpponent, GameController, GameSession, Position, ReplyTicket, UiEvent};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController<TerminalSurface, TokioScheduler>,
    cursor: Position,
}

impl App {
    /// Creates the application and starts the first game.
    ///
    /// Computer replies are delivered on `replies` once their delay elapses.
    #[instrument(skip(config, replies))]
    pub fn new(config: &AppConfig, replies: mpsc::UnboundedSender<ReplyTicket>) -> Self {
        let opponent = ComputerOpponent::from_seed(*config.seed());
        let mut controller =
            GameController::new(TerminalSurface::new(), TokioScheduler::new(replies), opponent)
                .with_reply_delay(config.reply_delay());
        controller.start(*config.mode());
        info!(mode = %config.mode(), "Application ready");
        Self {
            controller,
            cursor: Position::Center,
        }
    }

    /// What to draw.
    pub fn surface(&self) -> &TerminalSurface {
        self.controller.surface()
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        self.controller.session()
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match map_key(key, self.cursor) {
            KeyAction::Quit => return Flow::Quit,
            KeyAction::Cursor(position) => self.cursor = position,
            KeyAction::Ui(event) => self.dispatch(event),
            KeyAction::Ignore => {}
        }
        Flow::Continue
    }

    /// Forwards a presentation event to the controller.
    pub fn dispatch(&mut self, event: UiEvent) {
        if let UiEvent::CellClicked(index) = event
            && let Some(position) = Position::from_index(index)
        {
            self.cursor = position;
        }
        self.controller.handle(event);
    }

    /// Applies a delivered computer reply.
    #[instrument(skip(self))]
    pub fn handle_reply(&mut self, ticket: ReplyTicket) {
        if !self.controller.computer_turn(ticket) {
            debug!("Reply had nothing to do");
        }
    }
}
