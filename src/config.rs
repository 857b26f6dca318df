//! Runtime configuration, read from `SNAKE_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::fruit::FruitSpawn;
use crate::grid::Board;

pub const DEFAULT_TICK_MS: u64 = 170;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board: Board,
    pub tick_period: Duration,
    /// `None` picks a fresh seed at startup.
    pub seed: Option<u64>,
    pub fruit_spawn: FruitSpawn,
    /// Log destination. Logging is off without one since the game owns the
    /// terminal.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board: Board::default(),
            tick_period: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
            fruit_spawn: FruitSpawn::Anywhere,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or blank keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(raw) = get("SNAKE_TILES") {
            config.board = Board::new(parse_number("SNAKE_TILES", &raw)?)?;
        }

        if let Some(raw) = get("SNAKE_TICK_MS") {
            let ms: u64 = parse_number("SNAKE_TICK_MS", &raw)?;
            if ms == 0 {
                return Err(ConfigError::InvalidTickPeriod(ms));
            }
            config.tick_period = Duration::from_millis(ms);
        }

        if let Some(raw) = get("SNAKE_SEED") {
            config.seed = Some(parse_number("SNAKE_SEED", &raw)?);
        }

        if let Some(raw) = get("SNAKE_FRUIT_SPAWN") {
            config.fruit_spawn = match raw.to_lowercase().as_str() {
                "anywhere" => FruitSpawn::Anywhere,
                "free" => FruitSpawn::AvoidSnake,
                _ => return Err(ConfigError::InvalidFruitSpawn(raw)),
            };
        }

        config.log_file = get("SNAKE_LOG").map(PathBuf::from);

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidNumber { var, value: raw.to_string() })
}
