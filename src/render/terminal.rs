//! Full-screen terminal renderer built on crossterm

use super::{ColorTier, Frame, Palette, RenderConfig, Renderer};
use anyhow::{Context, Result};
use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

const CELL_GLYPH: char = '█';

/// Portion of the grid that fits on screen, centred on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    /// Fit a grid into `columns × rows` terminal cells, cropping evenly on each side
    pub fn fit(grid_width: usize, grid_height: usize, columns: usize, rows: usize) -> Self {
        let width = grid_width.min(columns);
        let height = grid_height.min(rows);
        Self {
            x: (grid_width - width) / 2,
            y: (grid_height - height) / 2,
            width,
            height,
        }
    }
}

fn to_color([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

/// Draws generations to the alternate screen, one character per cell
pub struct TerminalRenderer {
    out: Stdout,
    palette: Palette,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            palette: Palette::default(),
            active: false,
        }
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn initialize(&mut self, config: &RenderConfig) -> Result<()> {
        self.palette = config.palette.clone();
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        self.active = true;
        execute!(self.out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))
            .context("Failed to enter alternate screen")?;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let (columns, rows) = terminal::size().context("Failed to query terminal size")?;
        // Bottom line is the status bar
        let view = Viewport::fit(
            frame.grid.width(),
            frame.grid.height(),
            columns as usize,
            (rows as usize).saturating_sub(1),
        );

        for (screen_y, row) in frame.grid.rows().skip(view.y).take(view.height).enumerate() {
            queue!(self.out, MoveTo(0, screen_y as u16))?;
            let mut current_tier = None;
            for cell in &row[view.x..view.x + view.width] {
                let tier = ColorTier::from_cell(cell);
                if current_tier != Some(tier) {
                    queue!(self.out, SetForegroundColor(to_color(self.palette.color(tier))))?;
                    current_tier = Some(tier);
                }
                queue!(self.out, Print(CELL_GLYPH))?;
            }
        }

        queue!(
            self.out,
            MoveTo(0, rows.saturating_sub(1)),
            ResetColor,
            Print(format!(
                "Generation {}  Living {}  [q] quit",
                frame.generation,
                frame.grid.living_count()
            )),
            Clear(ClearType::UntilNewLine)
        )?;
        self.out.flush().context("Failed to flush terminal")?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.restore().context("Failed to restore terminal")
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_fits_small_grid() {
        assert_eq!(
            Viewport::fit(20, 10, 80, 24),
            Viewport { x: 0, y: 0, width: 20, height: 10 }
        );
    }

    #[test]
    fn test_viewport_crops_around_centre() {
        assert_eq!(
            Viewport::fit(160, 120, 80, 23),
            Viewport { x: 40, y: 48, width: 80, height: 23 }
        );
    }

    #[test]
    fn test_cleanup_without_initialize_is_noop() {
        let mut renderer = TerminalRenderer::new();
        renderer.cleanup().unwrap();
        renderer.cleanup().unwrap();
    }
}
