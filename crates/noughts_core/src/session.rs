//! Game session: the single owned game state.
//!
//! Lifecycle: `Idle -> InProgress -> {Won | Draw}`. [`GameSession::reset`]
//! returns to `InProgress` from anywhere, and [`GameSession::set_mode`]
//! always resets.
//!
//! Moves that break a precondition are ignored without touching state. The
//! [`MoveReport`] they return carries the reason only for diagnostics.

use crate::mode::GameMode;
use crate::position::Position;
use crate::rules::{Line, Outcome, evaluate_outcome};
use crate::types::{Board, Player, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created but not started.
    Idle,
    /// Accepting moves.
    InProgress,
    /// Finished with a winner.
    Won {
        /// The winner.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Finished with a full board and no winner.
    Draw,
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// Index outside 0-8.
    #[display("index {} is off the board", _0)]
    OffBoard(usize),
    /// Square already holds a mark.
    #[display("{} is occupied", _0)]
    Occupied(Position),
    /// Game is idle or finished.
    #[display("game is not active")]
    Inactive,
    /// The mover is not the player to move.
    #[display("not {}'s turn", _0)]
    NotYourTurn(Player),
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReport {
    /// The mark was placed.
    Applied {
        /// Who played.
        player: Player,
        /// Where.
        position: Position,
        /// Board evaluation after the move.
        outcome: Outcome,
    },
    /// State is unchanged.
    Ignored(IgnoreReason),
}

impl MoveReport {
    /// True if the mark was placed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveReport::Applied { .. })
    }
}

/// Complete game state, owned by one caller and mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    phase: Phase,
    mode: GameMode,
    history: Vec<Position>,
    epoch: u64,
}

impl GameSession {
    /// Creates an idle session in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            phase: Phase::Idle,
            mode,
            history: Vec::new(),
            epoch: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or who moved last, once finished).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Generation counter, bumped by every reset.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True while the game accepts moves.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// True when the computer should move next.
    pub fn is_computers_turn(&self) -> bool {
        self.is_active() && self.mode.computer() == Some(self.current_player)
    }

    /// Starts a fresh game: empty board, X to move.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.phase = Phase::InProgress;
        self.history.clear();
        self.epoch = self.epoch.wrapping_add(1);
        info!(epoch = self.epoch, "Game reset");
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        debug!(from = %self.mode, to = %mode, "Switching mode");
        self.mode = mode;
        self.reset();
    }

    /// Places the current player's mark at `index`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveReport {
        self.apply_move_as(self.current_player, index)
    }

    /// Places `player`'s mark at `index`, provided it is `player`'s turn.
    #[instrument(skip(self))]
    pub fn apply_move_as(&mut self, player: Player, index: usize) -> MoveReport {
        let position = match self.check_move(player, index) {
            Ok(position) => position,
            Err(reason) => {
                trace!(%reason, "Move ignored");
                return MoveReport::Ignored(reason);
            }
        };

        self.board.set(position, Square::Occupied(player));
        self.history.push(position);

        let outcome = evaluate_outcome(&self.board);
        match outcome {
            Outcome::Continuing => {}
            Outcome::Won { player, line } => {
                info!(winner = %player, ?line, "Game won");
                self.phase = Phase::Won {
                    winner: player,
                    line,
                };
            }
            Outcome::Draw => {
                info!("Game drawn");
                self.phase = Phase::Draw;
            }
        }
        if !outcome.is_terminal() {
            self.switch_player();
        }

        MoveReport::Applied {
            player,
            position,
            outcome,
        }
    }

    /// Hands the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Status line for the player.
    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::Idle => "Choose a mode to start".to_string(),
            Phase::InProgress => format!("{}'s turn", self.current_player),
            Phase::Won { winner, .. } => format!("{} wins!", winner),
            Phase::Draw => "It's a draw!".to_string(),
        }
    }

    fn check_move(&self, player: Player, index: usize) -> Result<Position, IgnoreReason> {
        let position = Position::from_index(index).ok_or(IgnoreReason::OffBoard(index))?;
        if !self.is_active() {
            return Err(IgnoreReason::Inactive);
        }
        if player != self.current_player {
            return Err(IgnoreReason::NotYourTurn(player));
        }
        if !self.board.is_empty(position) {
            return Err(IgnoreReason::Occupied(position));
        }
        Ok(position)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameSession {
        let mut session = GameSession::default();
        session.reset();
        session
    }

    #[test]
    fn test_idle_rejects_moves() {
        let mut session = GameSession::default();
        assert_eq!(
            session.apply_move(4),
            MoveReport::Ignored(IgnoreReason::Inactive)
        );
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_move_alternates_players() {
        let mut session = started();
        assert!(session.apply_move(4).is_applied());
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.history(), &[Position::Center]);
    }

    #[test]
    fn test_wrong_player_ignored() {
        let mut session = started();
        let before = session.clone();
        assert_eq!(
            session.apply_move_as(Player::O, 0),
            MoveReport::Ignored(IgnoreReason::NotYourTurn(Player::O))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_off_board_ignored() {
        let mut session = started();
        assert_eq!(
            session.apply_move(9),
            MoveReport::Ignored(IgnoreReason::OffBoard(9))
        );
    }

    #[test]
    fn test_reset_bumps_epoch() {
        let mut session = started();
        let epoch = session.epoch();
        session.apply_move(0);
        session.reset();
        assert_eq!(session.epoch(), epoch + 1);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_status_text() {
        let mut session = GameSession::default();
        assert_eq!(session.status_text(), "Choose a mode to start");
        session.reset();
        assert_eq!(session.status_text(), "X's turn");
        session.apply_move(0);
        assert_eq!(session.status_text(), "O's turn");
    }

    #[test]
    fn test_computers_turn_only_in_computer_mode() {
        let mut session = started();
        session.apply_move(0);
        assert!(!session.is_computers_turn());

        session.set_mode(GameMode::HumanVsComputer);
        assert!(!session.is_computers_turn());
        session.apply_move(0);
        assert!(session.is_computers_turn());
    }
}
