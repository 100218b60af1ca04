//! Grid representation and the generation-advance engine

use super::rules::GameOfLifeRules;
use crate::error::LifeError;
use itertools::iproduct;
use rayon::prelude::*;
use std::fmt;

/// State of a single grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    /// Consecutive generations this cell has been alive; 0 when dead or freshly seeded
    pub age: u32,
}

/// Inclusive bounds of the live cells on a grid.
///
/// An empty box (no live cells) has `x_min > x_max` and `y_min > y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl BoundingBox {
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    pub fn width(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.x_max - self.x_min + 1
        }
    }

    pub fn height(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.y_max - self.y_min + 1
        }
    }
}

/// Edge-bounded Game of Life grid with double-buffered generations
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    // Write target for the generation being computed; never read by the rule
    staging: Vec<Cell>,
}

/// Largest number of cells a grid may hold
pub const MAX_GRID_CELLS: usize = 1 << 24;

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let area = width
            .checked_mul(height)
            .filter(|&area| area > 0 && area <= MAX_GRID_CELLS)
            .ok_or(LifeError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); area],
            staging: vec![Cell::default(); area],
        })
    }

    /// Create a grid from rows of liveness flags (top row first)
    pub fn from_cells(rows: Vec<Vec<bool>>) -> anyhow::Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = rows.len();
        let width = rows[0].len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                if alive {
                    grid.seed_cell(x, y)?;
                }
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), LifeError> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Mark a cell alive for the current generation
    pub fn seed_cell(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx].alive = true;
        Ok(())
    }

    /// Get the committed state of a cell
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, LifeError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Whether a cell is alive; positions outside the grid are dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)].alive
    }

    fn is_alive_signed(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && self.is_alive(x as usize, y as usize)
    }

    /// Count live cells among the (up to) 8 adjacent positions.
    ///
    /// Each coordinate is checked against `[0, extent)` independently, so
    /// edge and corner cells simply have truncated neighbourhoods.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as isize, y as isize);
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dx, dy)| self.is_alive_signed(x + dx, y + dy))
            .count() as u8
    }

    /// Advance the grid by one generation.
    ///
    /// Every next-generation cell is computed from the committed generation
    /// into the staging buffer, then the buffers are swapped. No cell ever
    /// observes a neighbour's next state.
    pub fn advance(&mut self) {
        self.stage_next_generation();
        self.commit();
    }

    fn stage_next_generation(&mut self) {
        let mut staging = std::mem::take(&mut self.staging);
        staging.resize(self.cells.len(), Cell::default());

        let current = &*self;
        staging
            .par_chunks_mut(current.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, next) in row.iter_mut().enumerate() {
                    let cell = current.cells[current.index(x, y)];
                    let neighbors = current.count_live_neighbors(x, y);
                    let alive = GameOfLifeRules::should_be_alive(cell.alive, neighbors);
                    *next = Cell {
                        alive,
                        age: GameOfLifeRules::next_age(cell.age, alive),
                    };
                }
            });

        self.staging = staging;
    }

    fn commit(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.staging);
    }

    /// Inclusive bounds of all live cells, or an empty box when none are alive
    pub fn bounding_box_of_live_cells(&self) -> BoundingBox {
        let empty = BoundingBox {
            x_min: self.width,
            x_max: 0,
            y_min: self.height,
            y_max: 0,
        };

        self.living_cells()
            .into_iter()
            .fold(empty, |bounds, (x, y)| BoundingBox {
                x_min: bounds.x_min.min(x),
                x_max: bounds.x_max.max(x),
                y_min: bounds.y_min.min(y),
                y_max: bounds.y_max.max(y),
            })
    }

    /// Translate the whole grid by `(dx, dy)`, wrapping content at the edges
    pub fn shift(&mut self, dx: isize, dy: isize) {
        let dx = dx.rem_euclid(self.width as isize) as usize;
        let dy = dy.rem_euclid(self.height as isize) as usize;

        if dy != 0 {
            self.cells.rotate_right(dy * self.width);
        }
        if dx != 0 {
            for row in self.cells.chunks_mut(self.width) {
                row.rotate_right(dx);
            }
        }
    }

    /// Iterate over the committed rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Get all living cell coordinates as `(x, y)`
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(|(idx, _)| (idx % self.width, idx / self.width))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.alive)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", if cell.alive { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
