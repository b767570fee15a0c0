//! Heuristic computer opponent.
//!
//! Greedy and one ply deep: complete an own line if possible, otherwise
//! block the opponent's, otherwise play a uniformly random empty square.
//! It misses forks and loses to careful play.

use crate::position::Position;
use crate::rules::WINNING_LINES;
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Tier {
    /// Completes the computer's own line.
    #[display("win")]
    Win,
    /// Fills the square the opponent needs to complete a line.
    #[display("block")]
    Block,
    /// No line is one move from completion.
    #[display("random")]
    Random,
}

/// A selected move and the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct Choice {
    /// Where to play.
    position: Position,
    /// Why.
    tier: Tier,
}

/// Finds the empty square that completes one of `player`'s lines.
///
/// A line qualifies when exactly two of its squares belong to `player` and
/// the third is empty. Lines are scanned in declared order.
#[instrument(skip(board))]
pub fn find_strategic_move(board: &Board, player: Player) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(player))
            .count();
        if owned != 2 {
            return None;
        }
        line.iter().copied().find(|pos| board.is_empty(*pos))
    })
}

/// Chooses the computer's move.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<Choice> {
    if let Some(position) = find_strategic_move(board, computer) {
        return Some(Choice::new(position, Tier::Win));
    }
    if let Some(position) = find_strategic_move(board, opponent) {
        return Some(Choice::new(position, Tier::Block));
    }
    board
        .empty_positions()
        .choose(rng)
        .map(|position| Choice::new(*position, Tier::Random))
}

/// The computer player, owning its random source.
#[derive(Debug, Clone)]
pub struct ComputerOpponent {
    rng: StdRng,
}

impl ComputerOpponent {
    /// Creates an opponent seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an opponent with reproducible random moves.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Picks a move for `symbol` on `board`.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board, symbol: Player) -> Option<Choice> {
        let choice = choose_move(board, symbol, symbol.opponent(), &mut self.rng);
        if let Some(choice) = &choice {
            debug!(position = ?choice.position(), tier = %choice.tier(), "Computer chose move");
        }
        choice
    }
}

impl Default for ComputerOpponent {
    fn default() -> Self {
        Self::new()
    }
}
