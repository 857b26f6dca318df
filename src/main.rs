mod game;
mod term;

use std::fs::File;
use std::process::exit;

use env_logger::{Env, Target};
use fruit_snake::error::Result;
use fruit_snake::{Config, SnakeError};

fn main() {
    if let Err(err) = run() {
        eprintln!("fruit-snake: {}", err);
        exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let mut game = game::SnakeGame::new(config)?;
    game.initialize()?;

    // The terminal is restored even when a round fails
    let outcome = game.run();
    game.restore()?;
    outcome
}

/// Raw mode owns the screen, so logs only go to a file unless `RUST_LOG`
/// asks otherwise.
fn init_logging(config: &Config) -> Result<()> {
    let mut builder = match &config.log_file {
        Some(path) => {
            let file = File::create(path)?;
            let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("off")),
    };

    builder.try_init().map_err(|e| SnakeError::Logger(e.to_string()))
}
