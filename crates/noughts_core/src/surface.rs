//! Presentation seam.
//!
//! The controller drives a [`Surface`] and is driven by [`UiEvent`]s. A
//! front-end implements the trait and translates its own input into events.

use crate::mode::GameMode;
use crate::position::Position;
use crate::rules::Line;
use crate::types::Player;

/// Input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A cell was clicked. The index is unchecked.
    CellClicked(usize),
    /// A mode control was selected.
    ModeSelected(GameMode),
    /// The reset control was triggered.
    ResetPressed,
}

/// Output surfaces the controller draws on.
pub trait Surface {
    /// Shows `player`'s mark in a cell.
    fn render(&mut self, position: Position, player: Player);

    /// Empties a cell and drops any highlight on it.
    fn clear(&mut self, position: Position);

    /// Marks the winning line.
    fn highlight(&mut self, line: Line);

    /// Replaces the status text.
    fn set_status(&mut self, text: &str);

    /// Shows `mode` as the active mode control.
    fn show_mode(&mut self, mode: GameMode);
}
