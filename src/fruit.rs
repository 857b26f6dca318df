//! The wandering fruit.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Board, Cell};
use crate::snake::{Direction, Snake};

/// The fruit moves once every this many ticks.
pub const FRUIT_MOVE_PERIOD: u32 = 7;

pub const FRUIT_GLYPHS: [&str; 12] = [
    "🍎", "🍌", "🍒", "🍇", "🍉", "🍓", "🍑", "🍍", "🥝", "🥭", "🍊", "🍋",
];

/// Where a regenerated fruit may land.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FruitSpawn {
    /// Any cell, including ones the snake occupies.
    #[default]
    Anywhere,
    /// Only cells not occupied by the snake, falling back to any cell when
    /// the board is full.
    AvoidSnake,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fruit {
    cell: Cell,
    direction: Direction,
    phase: u32,
    glyph: &'static str,
}

impl Fruit {
    pub fn new(cell: Cell, direction: Direction, glyph: &'static str) -> Self {
        Fruit { cell, direction, phase: 0, glyph }
    }

    pub fn spawn<R: Rng + ?Sized>(board: Board, snake: &Snake, policy: FruitSpawn, rng: &mut R) -> Self {
        let cell = match policy {
            FruitSpawn::Anywhere => board.random_cell(rng),
            FruitSpawn::AvoidSnake => {
                let free: Vec<Cell> = board.cells().filter(|c| !snake.contains(*c)).collect();
                match free.choose(rng) {
                    Some(cell) => *cell,
                    None => {
                        log::debug!("no free cell for fruit, spawning anywhere");
                        board.random_cell(rng)
                    }
                }
            }
        };
        let direction = Direction::random(rng);
        let glyph = FRUIT_GLYPHS[rng.gen_range(0..FRUIT_GLYPHS.len())];
        Fruit::new(cell, direction, glyph)
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Advances the motion phase. Every [`FRUIT_MOVE_PERIOD`]th call moves the
    /// fruit one wrapped cell along its direction and returns the new cell.
    pub fn tick(&mut self, board: Board) -> Option<Cell> {
        self.phase += 1;
        if self.phase < FRUIT_MOVE_PERIOD {
            return None;
        }
        self.phase = 0;
        self.cell = self.cell.step(self.direction, board);
        Some(self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn moves_on_every_seventh_tick() {
        let board = Board::new(20).unwrap();
        let mut fruit = Fruit::new(Cell::new(3, 3), Direction::Down, FRUIT_GLYPHS[0]);

        for _ in 0..6 {
            assert_eq!(fruit.tick(board), None);
        }
        assert_eq!(fruit.tick(board), Some(Cell::new(3, 4)));
        assert_eq!(fruit.phase(), 0);

        for _ in 0..6 {
            assert_eq!(fruit.tick(board), None);
        }
        assert_eq!(fruit.tick(board), Some(Cell::new(3, 5)));
    }

    #[test]
    fn movement_wraps() {
        let board = Board::new(5).unwrap();
        let mut fruit = Fruit::new(Cell::new(0, 2), Direction::Left, FRUIT_GLYPHS[1]);
        let moved = (0..FRUIT_MOVE_PERIOD).filter_map(|_| fruit.tick(board)).last();
        assert_eq!(moved, Some(Cell::new(4, 2)));
    }

    #[test]
    fn spawn_is_on_board_with_known_glyph() {
        let board = Board::new(8).unwrap();
        let snake = Snake::new(board.center());
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let fruit = Fruit::spawn(board, &snake, FruitSpawn::Anywhere, &mut rng);
            assert!(board.contains(fruit.cell()));
            assert!(FRUIT_GLYPHS.contains(&fruit.glyph()));
            assert_eq!(fruit.phase(), 0);
        }
    }

    #[test]
    fn avoid_snake_picks_the_only_free_cell() {
        let board = Board::new(2).unwrap();
        let snake = Snake::from_cells(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]).unwrap();
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..20 {
            let fruit = Fruit::spawn(board, &snake, FruitSpawn::AvoidSnake, &mut rng);
            assert_eq!(fruit.cell(), Cell::new(0, 1));
        }
    }

    #[test]
    fn avoid_snake_falls_back_on_full_board() {
        let board = Board::new(1).unwrap();
        let snake = Snake::new(Cell::new(0, 0));
        let mut rng = Pcg32::seed_from_u64(3);
        let fruit = Fruit::spawn(board, &snake, FruitSpawn::AvoidSnake, &mut rng);
        assert_eq!(fruit.cell(), Cell::new(0, 0));
    }
}
