//! Initial configuration strategies

use crate::error::LifeError;
use crate::game_of_life::{load_pattern_from_file, parse_pattern, Grid};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Length of the built-in horizontal line
pub const DEFAULT_LINE_LENGTH: usize = 20;
/// Row the built-in line is placed on when the grid is tall enough
pub const DEFAULT_LINE_ROW: usize = 50;

/// Where the first generation comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Built-in horizontal line of live cells
    Default,
    /// Pattern file; falls back to `Default` when it cannot be read
    File(PathBuf),
    /// Pattern text supplied in memory
    Text(String),
}

impl SeedSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => SeedSource::File(path),
            None => SeedSource::Default,
        }
    }

    /// Seed `grid` with this source's live cells
    pub fn apply(&self, grid: &mut Grid) -> Result<(), LifeError> {
        match self {
            SeedSource::Default => seed_default(grid),
            SeedSource::File(path) => match load_pattern_from_file(path) {
                Ok(pattern) => {
                    debug!(path = %path.display(), cells = pattern.live_cells.len(), "loaded pattern");
                    pattern.apply(grid)
                }
                Err(err) if err.is_recoverable() => {
                    warn!("{}, defaulting seed", err);
                    seed_default(grid)
                }
                Err(err) => Err(err),
            },
            SeedSource::Text(content) => parse_pattern(content).apply(grid),
        }
    }
}

/// Seed the built-in line: up to 20 cells from the left edge on row 50,
/// or on the middle row when the grid is shorter than that
pub fn seed_default(grid: &mut Grid) -> Result<(), LifeError> {
    let row = if DEFAULT_LINE_ROW < grid.height() {
        DEFAULT_LINE_ROW
    } else {
        grid.height() / 2
    };

    for x in 0..DEFAULT_LINE_LENGTH.min(grid.width()) {
        grid.seed_cell(x, row)?;
    }
    Ok(())
}
