//! Configuration layering tests.

use clap::Parser;
use noughts::{AppConfig, Cli};
use noughts_core::GameMode;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = AppConfig::load("definitely/not/here.toml").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(config.reply_delay(), Duration::from_millis(500));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_file_values_are_read() {
    let file = config_file(
        r#"
mode = "computer"
computer_delay_ms = 250
seed = 42
log_file = "game.log"
"#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.mode(), GameMode::HumanVsComputer);
    assert_eq!(config.reply_delay(), Duration::from_millis(250));
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = config_file("computer_delay_ms = 0\n");

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let file = config_file("difficulty = \"hard\"\n");

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = config_file("mode = \"computer\"\ncomputer_delay_ms = 900\nseed = 1\n");
    let path = file.path().to_str().unwrap();

    let cli = Cli::parse_from(["noughts", "--config", path, "--mode", "human", "--seed", "7"]);
    let config = AppConfig::resolve(&cli).unwrap();

    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(*config.seed(), Some(7));
    // Not given on the command line, so the file wins.
    assert_eq!(*config.computer_delay_ms(), 900);
}
