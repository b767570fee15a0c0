//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::types::Board;
use tracing::instrument;

/// A full board with no complete line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
