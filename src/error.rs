use std::io;

use thiserror::Error;

/// Rejected configuration. Raised before any tick runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tile count must be between 1 and 255, got {0}")]
    InvalidTileCount(i64),
    #[error("tick period must be positive, got {0}ms")]
    InvalidTickPeriod(u64),
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("unknown fruit spawn policy {0:?} (expected `anywhere` or `free`)")]
    InvalidFruitSpawn(String),
}

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("terminal is {available:?} but the board needs at least {needed:?}")]
    TerminalTooSmall { needed: (u16, u16), available: (u16, u16) },
    #[error("failed to initialise logging: {0}")]
    Logger(String),
}

pub type Result<T, E = SnakeError> = std::result::Result<T, E>;
