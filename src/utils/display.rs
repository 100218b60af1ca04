//! Display and output formatting utilities

use crate::game_of_life::Grid;
use crate::render::ColorTier;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form, one glyph per cell shaded by age
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1) * 3);
        for row in grid.rows() {
            for cell in row {
                output.push(ColorTier::from_cell(cell).glyph());
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell.alive { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Summarise population and live-cell bounds
    pub fn format_statistics(grid: &Grid) -> String {
        let living = grid.living_count();
        let density = living as f64 / (grid.width() * grid.height()) as f64 * 100.0;
        let bounds = grid.bounding_box_of_live_cells();

        let mut output = String::new();
        output.push_str(&format!("Grid: {}x{}\n", grid.width(), grid.height()));
        output.push_str(&format!("Living cells: {}\n", living));
        output.push_str(&format!("Density: {:.1}%\n", density));
        if bounds.is_empty() {
            output.push_str("Bounding box: empty\n");
        } else {
            output.push_str(&format!(
                "Bounding box: x {}..={}, y {}..={} ({}x{})\n",
                bounds.x_min,
                bounds.x_max,
                bounds.y_min,
                bounds.y_max,
                bounds.width(),
                bounds.height()
            ));
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_formatting() {
        let mut grid = Grid::from_cells(vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ])
        .unwrap();

        // Seeded cells have not aged yet but still show as newborn
        assert_eq!(GridFormatter::format_grid_compact(&grid), "···\n░░░\n···\n");

        grid.advance();
        assert_eq!(GridFormatter::format_grid_compact(&grid), "·░·\n·░·\n·░·\n");

        grid.advance();
        assert_eq!(GridFormatter::format_grid_compact(&grid), "···\n░▒░\n···\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains(" 1 ██████"));
    }

    #[test]
    fn test_statistics() {
        let mut grid = Grid::new(4, 5).unwrap();
        assert!(GridFormatter::format_statistics(&grid).contains("Bounding box: empty"));

        grid.seed_cell(1, 2).unwrap();
        grid.seed_cell(3, 4).unwrap();
        let stats = GridFormatter::format_statistics(&grid);
        assert!(stats.contains("Living cells: 2"));
        assert!(stats.contains("Density: 10.0%"));
        assert!(stats.contains("x 1..=3, y 2..=4 (3x3)"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));

        assert!(ColorOutput::error("bad config").contains("bad config"));
        assert!(ColorOutput::warning("skipped").contains("skipped"));
    }
}
