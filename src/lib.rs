//! Snake on a toroidal grid, chasing fruit that wanders on its own.
//!
//! Core modules:
//! - `grid`: wrapped coordinates and the board
//! - `snake`, `fruit`: the entities
//! - `input`: key presses to a pending direction
//! - `engine`: the per-tick update and the game state it owns
//! - `ticker`: when the next tick is due
//! - `palette`, `config`, `error`: colours, settings, failures

pub mod config;
pub mod engine;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod input;
pub mod palette;
pub mod snake;
pub mod ticker;

pub use config::Config;
pub use engine::{GameResult, GameState, TickEngine, TickEvent};
pub use error::{ConfigError, SnakeError};
pub use fruit::{Fruit, FruitSpawn};
pub use grid::{wrap, Board, Cell};
pub use input::InputArbiter;
pub use snake::{Direction, Snake};
pub use ticker::Ticker;
