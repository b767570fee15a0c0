//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here knows whose turn it is
//! or whether the game is still accepting moves; that lives in the session.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, WINNING_LINES, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    Continuing,
    /// `player` owns every square of `line`.
    Won {
        /// The winner.
        player: Player,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// Board is full and no line is complete.
    Draw,
}

impl Outcome {
    /// True unless the game continues.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continuing)
    }
}

/// Evaluates the board.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete one
/// is reported, so a board with two complete lines still has one answer.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Won { player, line };
    }
    if is_draw(board) {
        return Outcome::Draw;
    }
    Outcome::Continuing
}
