//! Noughts - tic-tac-toe in the terminal.
//!
//! The game rules, computer opponent and controller live in `noughts_core`.
//! This crate wires them to a ratatui front end and adds configuration.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: terminal surface, key and mouse input, tokio-driven computer replies
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use noughts::{AppConfig, Cli, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let cli = Cli::parse();
//! let config = AppConfig::resolve(&cli)?;
//! run_tui(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

// Crate-level exports - configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};

// Crate-level exports - terminal front end
pub use tui::{
    App, Flow, KeyAction, ScreenLayout, TerminalSurface, TokioScheduler, hit_test, layout,
    map_key, move_cursor, run_tui,
};
