//! Terminal view model.
//!
//! The controller writes into [`TerminalSurface`]; the renderer reads it
//! back every frame. Nothing here draws.

use noughts_core::{GameMode, Line, Player, Position, Surface};
use tracing::trace;

/// What the terminal should currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalSurface {
    cells: [Option<Player>; 9],
    highlighted: Option<Line>,
    status: String,
    mode: GameMode,
}

impl TerminalSurface {
    /// Creates a blank surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark shown in a cell.
    pub fn cell(&self, position: Position) -> Option<Player> {
        self.cells[position.index()]
    }

    /// True if the cell is part of the highlighted line.
    pub fn is_highlighted(&self, position: Position) -> bool {
        self.highlighted
            .is_some_and(|line| line.contains(&position))
    }

    /// Status text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Active mode control.
    pub fn mode(&self) -> GameMode {
        self.mode
    }
}

impl Surface for TerminalSurface {
    fn render(&mut self, position: Position, player: Player) {
        trace!(?position, %player, "Render cell");
        self.cells[position.index()] = Some(player);
    }

    fn clear(&mut self, position: Position) {
        self.cells[position.index()] = None;
        if self.is_highlighted(position) {
            self.highlighted = None;
        }
    }

    fn highlight(&mut self, line: Line) {
        self.highlighted = Some(line);
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn show_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }
}
