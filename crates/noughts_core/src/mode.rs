//! Game mode selection.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Who sits across the board from the human.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "human", alias = "human-vs-human")]
    #[strum(to_string = "human", serialize = "human-vs-human", ascii_case_insensitive)]
    HumanVsHuman,
    /// The human plays X against the heuristic computer playing O.
    #[serde(rename = "computer", alias = "human-vs-computer")]
    #[strum(
        to_string = "computer",
        serialize = "human-vs-computer",
        ascii_case_insensitive
    )]
    HumanVsComputer,
}

impl GameMode {
    /// Mark played by the human in computer mode.
    pub const HUMAN: Player = Player::X;
    /// Mark played by the computer in computer mode.
    pub const COMPUTER: Player = Player::O;

    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Two Players",
            GameMode::HumanVsComputer => "vs Computer",
        }
    }

    /// The computer's mark, if this mode has a computer.
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer => Some(Self::COMPUTER),
        }
    }
}
