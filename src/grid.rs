//! Toroidal grid math.
//!
//! Every positional update goes through [`wrap`], so leaving one edge of the
//! board re-enters on the opposite edge.

use rand::Rng;

use crate::error::ConfigError;
use crate::snake::Direction;

/// 400px canvas over a 20px grid.
pub const DEFAULT_TILE_COUNT: u16 = 20;

/// Largest board we accept; each tile is two terminal columns wide.
pub const MAX_TILE_COUNT: u16 = 255;

/// Wraps `coord` into `0..size`. `size` must be non-zero.
pub fn wrap(coord: i32, size: u16) -> u16 {
    coord.rem_euclid(i32::from(size)) as u16
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell in `dir`, wrapped onto the board.
    pub fn step(self, dir: Direction, board: Board) -> Cell {
        let (dx, dy) = dir.delta();
        Cell {
            x: wrap(i32::from(self.x) + dx, board.tile_count()),
            y: wrap(i32::from(self.y) + dy, board.tile_count()),
        }
    }
}

impl From<(u16, u16)> for Cell {
    fn from((x, y): (u16, u16)) -> Self {
        Cell { x, y }
    }
}

/// A square board of `tile_count` x `tile_count` cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tile_count: u16,
}

impl Default for Board {
    fn default() -> Self {
        Board { tile_count: DEFAULT_TILE_COUNT }
    }
}

impl Board {
    pub fn new(tile_count: i64) -> Result<Self, ConfigError> {
        if tile_count <= 0 || tile_count > i64::from(MAX_TILE_COUNT) {
            return Err(ConfigError::InvalidTileCount(tile_count));
        }
        Ok(Board { tile_count: tile_count as u16 })
    }

    pub fn tile_count(&self) -> u16 {
        self.tile_count
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.tile_count / 2, self.tile_count / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.tile_count && cell.y < self.tile_count
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0..self.tile_count),
            y: rng.gen_range(0..self.tile_count),
        }
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.tile_count;
        (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y)))
    }
}
