//! Tic-tac-toe rules, session state machine and heuristic opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Position`]
//! - **Rules**: [`evaluate_outcome`] over the eight [`WINNING_LINES`]
//! - **Opponent**: the win / block / random heuristic in [`choose_move`]
//! - **Session**: the owned [`GameSession`] and its lifecycle
//! - **Controller**: [`GameController`] wires a [`Surface`] and a
//!   [`Scheduler`] to the session
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameMode, GameSession};
//!
//! let mut session = GameSession::new(GameMode::HumanVsHuman);
//! session.reset();
//! for index in [0, 4, 1, 7, 2] {
//!     session.apply_move(index);
//! }
//! assert!(!session.is_active());
//! assert_eq!(session.status_text(), "X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod mode;
mod opponent;
mod position;
pub mod rules;
mod schedule;
mod session;
mod surface;
mod types;

pub use controller::{DEFAULT_REPLY_DELAY, DEFAULT_REPLY_DELAY_MS, GameController};
pub use mode::GameMode;
pub use opponent::{Choice, ComputerOpponent, Tier, choose_move, find_strategic_move};
pub use position::Position;
pub use rules::{Line, Outcome, WINNING_LINES, evaluate_outcome};
pub use schedule::{QueueScheduler, ReplyTicket, Scheduler};
pub use session::{GameSession, IgnoreReason, MoveReport, Phase};
pub use surface::{Surface, UiEvent};
pub use types::{Board, BoardParseError, Player, Square};
