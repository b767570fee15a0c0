//! Command-line interface for noughts.

use clap::Parser;
use noughts_core::GameMode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe for two players or against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting mode: "human" or "computer"
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Log file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.mode, None);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "noughts",
            "--mode",
            "computer",
            "--delay-ms",
            "0",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(GameMode::HumanVsComputer));
        assert_eq!(cli.delay_ms, Some(0));
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["noughts", "--mode", "robot"]).is_err());
    }
}
