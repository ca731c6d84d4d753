use itertools::Itertools;
use rand::Rng;

use crate::{cell::Cell, error::WorldError};

/// A fixed-size Life world.
///
/// Storage is `(width + 2) x (height + 2)` cells in row-major order. Logical
/// `(x, y)` lives at storage `(x + 1, y + 1)`; the outer frame is always dead
/// so every logical cell has a full 3x3 window and nothing wraps.
#[derive(Clone, Debug)]
pub struct World {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
}

impl World {
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::InvalidDimension { width, height });
        }
        let too_large = || WorldError::TooLarge { width, height };
        let len = width
            .checked_add(2)
            .zip(height.checked_add(2))
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, Cell::default());
        Ok(Self {
            width,
            height,
            generation: 0,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations advanced since the world was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), WorldError> {
        let i = self.checked_index(x, y)?;
        self.cells[i].toggle_life();
        Ok(())
    }

    pub fn is_alive_at(&self, x: usize, y: usize) -> Result<bool, WorldError> {
        let i = self.checked_index(x, y)?;
        Ok(self.cells[i].is_alive())
    }

    /// Flips a fair coin for every logical cell.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for (x, y) in storage_positions(self.width, self.height) {
            let i = self.index(x, y);
            self.cells[i].set_alive(rng.random_bool(0.5));
        }
    }

    /// Advances every logical cell by one generation.
    pub fn advance_generation(&mut self) {
        // All counts must see the current generation, so nothing is committed
        // until every cell has computed its next state.
        for (x, y) in storage_positions(self.width, self.height) {
            let neighbours = self.neighbours(x, y);
            let i = self.index(x, y);
            self.cells[i].compute_next(neighbours);
        }
        for (x, y) in storage_positions(self.width, self.height) {
            let i = self.index(x, y);
            self.cells[i].commit();
        }
        self.generation += 1;
    }

    pub fn population(&self) -> usize {
        self.alive_cells().count()
    }

    /// Logical coordinates of every alive cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        storage_positions(self.width, self.height)
            .filter(|&(x, y)| self.cells[self.index(x, y)].is_alive())
            .map(|(x, y)| (x - 1, y - 1))
    }
}

impl World {
    fn index(&self, x: usize, y: usize) -> usize {
        y * (self.width + 2) + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, WorldError> {
        if x >= self.width || y >= self.height {
            return Err(WorldError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x + 1, y + 1))
    }

    fn neighbours(&self, x: usize, y: usize) -> u8 {
        let block = (y - 1..=y + 1)
            .cartesian_product(x - 1..=x + 1)
            .filter(|&(y, x)| self.cells[self.index(x, y)].is_alive())
            .count() as u8;
        block - u8::from(self.cells[self.index(x, y)].is_alive())
    }

    /// Caller guarantees `(x, y)` is logical.
    pub(crate) fn alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x + 1, y + 1)].is_alive()
    }

    /// Caller guarantees `(x, y)` is logical.
    pub(crate) fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x + 1, y + 1);
        self.cells[i].set_alive(alive);
    }
}

/// Storage coordinates `(x, y)` of the logical cells, row by row.
fn storage_positions(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..=height)
        .cartesian_product(1..=width)
        .map(|(y, x)| (x, y))
}

impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        (self.width, self.height) == (other.width, other.height) && self.cells == other.cells
    }
}

impl Eq for World {}
