//! Error types for the Game of Life engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the grid engine, pattern loading and seeding
#[derive(Debug, Error)]
pub enum LifeError {
    #[error(
        "invalid grid dimensions {width}x{height}: both must be at least 1 and the area at most {max} cells",
        max = crate::game_of_life::MAX_GRID_CELLS
    )]
    InvalidDimension { width: usize, height: usize },

    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("pattern width ({pattern_width}) too wide for grid width ({grid_width})")]
    PatternTooWide {
        pattern_width: usize,
        grid_width: usize,
    },

    #[error("pattern height ({pattern_height}) too tall for grid height ({grid_height})")]
    PatternTooTall {
        pattern_height: usize,
        grid_height: usize,
    },

    #[error("unable to read pattern file '{}'", path.display())]
    SeedSourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LifeError {
    /// Whether the simulation can continue by falling back to the default seed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LifeError::SeedSourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_seed_is_recoverable() {
        let missing = LifeError::SeedSourceUnavailable {
            path: PathBuf::from("nope.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(missing.is_recoverable());

        let wide = LifeError::PatternTooWide {
            pattern_width: 12,
            grid_width: 10,
        };
        assert!(!wide.is_recoverable());
        assert!(!LifeError::InvalidDimension { width: 0, height: 3 }.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = LifeError::OutOfBounds { x: 5, y: 1, width: 4, height: 4 };
        assert_eq!(err.to_string(), "coordinates (5, 1) out of bounds for 4x4 grid");

        let err = LifeError::SeedSourceUnavailable {
            path: PathBuf::from("patterns/glider.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("patterns/glider.txt"));
    }
}
