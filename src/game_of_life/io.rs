//! Plain-text pattern files
//!
//! Lines starting with `!` are comments. Every other line is one grid row,
//! top to bottom, and each character one column; `O` marks a live cell and
//! anything else is dead.

use super::Grid;
use crate::error::LifeError;
use anyhow::{Context, Result};
use std::path::Path;

const COMMENT_MARKER: char = '!';
const LIVE_CELL: char = 'O';
const DEAD_CELL: char = '.';

/// A parsed pattern, not yet placed on a grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    /// Live cell coordinates as `(x, y)`
    pub live_cells: Vec<(usize, usize)>,
    /// Length of the longest row
    pub width: usize,
    /// Number of non-comment rows
    pub height: usize,
}

impl Pattern {
    /// Seed the pattern's live cells onto `grid` at its top-left corner.
    ///
    /// The pattern is checked against the grid extents before any cell is
    /// set, so a rejected pattern leaves the grid untouched.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), LifeError> {
        if self.width > grid.width() {
            return Err(LifeError::PatternTooWide {
                pattern_width: self.width,
                grid_width: grid.width(),
            });
        }
        if self.height > grid.height() {
            return Err(LifeError::PatternTooTall {
                pattern_height: self.height,
                grid_height: grid.height(),
            });
        }

        for &(x, y) in &self.live_cells {
            grid.seed_cell(x, y)?;
        }
        Ok(())
    }
}

/// Parse a pattern from its text representation
pub fn parse_pattern(content: &str) -> Pattern {
    let mut pattern = Pattern::default();

    for (y, line) in content
        .lines()
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .enumerate()
    {
        let mut row_width = 0;
        for (x, ch) in line.chars().enumerate() {
            if ch == LIVE_CELL {
                pattern.live_cells.push((x, y));
            }
            row_width = x + 1;
        }
        pattern.width = pattern.width.max(row_width);
        pattern.height = y + 1;
    }

    pattern
}

/// Load a pattern from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern, LifeError> {
    let content = std::fs::read_to_string(&path).map_err(|source| LifeError::SeedSourceUnavailable {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    Ok(parse_pattern(&content))
}

/// Convert a grid to its pattern text, with a leading comment line
pub fn pattern_to_string(grid: &Grid, comment: &str) -> String {
    let mut result = String::with_capacity((grid.height() + 1) * (grid.width() + 1));

    result.push(COMMENT_MARKER);
    result.push_str(comment);
    result.push('\n');

    for row in grid.rows() {
        for cell in row {
            result.push(if cell.alive { LIVE_CELL } else { DEAD_CELL });
        }
        result.push('\n');
    }

    result
}

/// Save a grid to a pattern file
pub fn save_pattern_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let name = path
        .as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pattern")
        .to_string();
    let content = pattern_to_string(grid, &format!("Name: {}", name));

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", "!Name: Glider\n.O.\n..O\nOOO\n"),
        ("blinker.txt", "!Name: Blinker\n!Period 2 oscillator\nOOO\n"),
        ("block.txt", "!Name: Block\n!Still life\nOO\nOO\n"),
        ("beacon.txt", "!Name: Beacon\nOO..\nOO..\n..OO\n..OO\n"),
        ("line.txt", "!Name: Line\n!Twenty cells in a row\nOOOOOOOOOOOOOOOOOOOO\n"),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
