use std::time::{Duration, Instant};

use crate::term::{Coords, TermInt, TermManager};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use fruit_snake::error::Result;
use fruit_snake::palette::INITIAL_BACKGROUND;
use fruit_snake::{Cell, Config, GameResult, GameState, InputArbiter, SnakeError, TickEngine, TickEvent, Ticker};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const SNAKE_COLOR: Color = Color::Rgb { r: 0xa2, g: 0xd5, b: 0xc6 };
const SNAKE_BODY: &str = "██";
const DEAD_SNAKE: &str = "XX";
const EMPTY_CELL: &str = "  ";

/// How long to block on input while paused before looping again.
const PAUSED_POLL: Duration = Duration::from_millis(250);

/// Terminal columns per board tile; fruit glyphs are double width.
const CELL_WIDTH: TermInt = 2;

/// What to do once a round ends.
enum Flow {
    Again,
    Quit,
}

pub struct SnakeGame {
    config: Config,
    term: TermManager,
    engine: TickEngine,
    arbiter: InputArbiter,
    origin: Coords,
    paused: bool,
}

impl SnakeGame {
    pub fn new(config: Config) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        log::info!(
            "starting: {} tiles, {:?} per tick, fruit spawn {:?}, seed {}",
            config.board.tile_count(),
            config.tick_period,
            config.fruit_spawn,
            seed
        );

        let term = TermManager::new()?;
        let tiles = config.board.tile_count();
        // Score line, then the bordered board.
        let needed = (tiles * CELL_WIDTH + 2, tiles + 3);
        let available = term.get_terminal_size();
        if needed.0 > available.0 || needed.1 > available.1 {
            return Err(SnakeError::TerminalTooSmall { needed, available });
        }
        let origin = ((available.0 - needed.0) / 2, (available.1 - needed.1) / 2);

        let engine = TickEngine::new(config.board, config.fruit_spawn, Pcg32::seed_from_u64(seed));
        let arbiter = InputArbiter::new(engine.state().direction());

        Ok(SnakeGame { config, term, engine, arbiter, origin, paused: false })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()?;
        Ok(())
    }

    /// Intro, then rounds until the player quits.
    pub fn run(&mut self) -> Result<()> {
        if let Flow::Quit = self.show_intro()? {
            return Ok(());
        }

        loop {
            match self.play()? {
                Flow::Again => self.engine.restart(),
                Flow::Quit => return Ok(()),
            }
        }
    }

    fn show_intro(&mut self) -> Result<Flow> {
        self.term.clear()?;
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message();
        Ok(if is_ctrl_c(&key) { Flow::Quit } else { Flow::Again })
    }

    fn play(&mut self) -> Result<Flow> {
        self.paused = false;
        self.arbiter.reset(self.engine.state().direction());
        self.term.clear()?;
        self.redraw()?;

        let mut ticker = Ticker::new(self.config.tick_period, Instant::now());

        let final_score = loop {
            if !self.paused && ticker.is_due(Instant::now()) {
                let result = self.engine.step(self.arbiter.pending());
                self.keep_score();
                self.redraw()?;

                if let GameResult::Over { score } = result {
                    break score;
                }
                continue;
            }

            let wait = if self.paused { PAUSED_POLL } else { ticker.time_until(Instant::now()) };
            let key = match self.term.poll_key(wait)? {
                Some(key) => key,
                None => continue,
            };

            match key {
                ev if is_ctrl_c(&ev) => return Ok(Flow::Quit),
                KeyEvent { code: KeyCode::Esc, .. } => {
                    self.toggle_pause()?;
                    if !self.paused {
                        ticker.restart(Instant::now());
                    }
                }
                KeyEvent { code, .. } if !self.paused => {
                    if let Some(dir) = self.arbiter.on_key(code, self.engine.state()) {
                        log::trace!("pending direction {:?}", dir);
                    }
                }
                _ => {}
            }
        };

        self.game_over(final_score)?;

        // Quit if the user CTRL+C's after the game
        let key = self.term.read_key_blocking()?;
        self.term.hide_message();
        Ok(if is_ctrl_c(&key) { Flow::Quit } else { Flow::Again })
    }

    ///////////////////////////////////////////////////////////////////////////

    fn keep_score(&self) {
        for event in self.engine.state().events() {
            if let TickEvent::Consumed { score } = event {
                log::info!("score {}", score);
            }
        }
    }

    fn game_over(&mut self, score: u32) -> Result<()> {
        let state = self.engine.state();
        for cell in state.snake().body() {
            let pos = cell_pos(self.origin, *cell);
            self.term.print_at(pos, DEAD_SNAKE, Some(Color::Red), None)?;
        }

        self.term.show_message(&[
            "Game Over",
            &format!("Score: {}", score),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit.",
        ])?;
        Ok(())
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message();
            self.redraw()?;
        }

        self.paused = !self.paused;
        Ok(())
    }

    /// Draws the whole frame from the current state.
    fn redraw(&mut self) -> Result<()> {
        draw_state(&mut self.term, self.origin, self.engine.state())?;
        self.term.draw_message()?;
        self.term.flush()?;
        Ok(())
    }
}

fn draw_state(term: &mut TermManager, origin: Coords, state: &GameState) -> Result<()> {
    let tiles = state.board().tile_count();
    let (r, g, b) = state.background().map(|c| c.to_rgb()).unwrap_or(INITIAL_BACKGROUND);
    let frame_bg = Color::Rgb { r, g, b };
    let (ir, ig, ib) = INITIAL_BACKGROUND;
    let board_bg = Color::Rgb { r: ir, g: ig, b: ib };

    let score_line = format!("{:<width$}", format!("Score: {}", state.score()), width = (tiles * CELL_WIDTH + 2) as usize);
    term.print_at(origin, &score_line, Some(Color::White), None)?;
    term.draw_borders((origin.0, origin.1 + 1), tiles * CELL_WIDTH + 2, tiles + 2, frame_bg)?;

    let blank_row = EMPTY_CELL.repeat(tiles as usize);
    for y in 0..tiles {
        term.print_at(cell_pos(origin, Cell::new(0, y)), &blank_row, None, Some(board_bg))?;
    }

    let fruit = state.fruit();
    term.print_at(cell_pos(origin, fruit.cell()), fruit.glyph(), None, Some(board_bg))?;

    let head_char = state.direction().head_char();
    let head: String = [head_char, head_char].iter().collect();
    for (i, cell) in state.snake().body().iter().enumerate().rev() {
        let text = if i == 0 { head.as_str() } else { SNAKE_BODY };
        term.print_at(cell_pos(origin, *cell), text, Some(SNAKE_COLOR), Some(board_bg))?;
    }

    Ok(())
}

fn cell_pos(origin: Coords, cell: Cell) -> Coords {
    (origin.0 + 1 + cell.x * CELL_WIDTH, origin.1 + 2 + cell.y)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
