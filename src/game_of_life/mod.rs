//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod io;

pub use grid::{BoundingBox, Cell, Grid, MAX_GRID_CELLS};
pub use rules::GameOfLifeRules;
pub use io::{create_example_patterns, load_pattern_from_file, parse_pattern, save_pattern_to_file, Pattern};
