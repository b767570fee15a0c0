//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use noughts_core::{GameMode, Position, UiEvent};
use tracing::instrument;

/// What a key press means to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the game controller.
    Ui(UiEvent),
    /// Move the cursor.
    Cursor(Position),
    /// Leave the application.
    Quit,
    /// Unbound key.
    Ignore,
}

/// Maps a key press, given the current cursor.
///
/// `1`-`9` click cells directly, arrows move the cursor, `Enter`/`Space`
/// click the cursor cell, `h`/`c` select a mode and `r` resets.
#[instrument]
pub fn map_key(key: KeyCode, cursor: Position) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            KeyAction::Ui(UiEvent::CellClicked(index))
        }
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Ui(UiEvent::CellClicked(cursor.index())),
        KeyCode::Char('h') | KeyCode::Char('H') => {
            KeyAction::Ui(UiEvent::ModeSelected(GameMode::HumanVsHuman))
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            KeyAction::Ui(UiEvent::ModeSelected(GameMode::HumanVsComputer))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Ui(UiEvent::ResetPressed),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(cursor, key))
        }
        _ => KeyAction::Ignore,
    }
}

/// Moves cursor based on arrow keys. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
