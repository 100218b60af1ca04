//! Plain-text renderer

use super::{Frame, RenderConfig, Renderer};
use crate::utils::GridFormatter;
use anyhow::{Context, Result};
use std::io::Write;

/// Writes every generation as a block of tier glyphs
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn initialize(&mut self, config: &RenderConfig) -> Result<()> {
        writeln!(
            self.out,
            "Game of Life {}x{} ({}x{} px)",
            config.grid_width, config.grid_height, config.pixel_width, config.pixel_height
        )
        .context("Failed to write renderer header")?;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        writeln!(
            self.out,
            "Generation {} (Living: {}):",
            frame.generation,
            frame.grid.living_count()
        )?;
        write!(self.out, "{}", GridFormatter::format_grid_compact(frame.grid))?;
        self.out.flush().context("Failed to flush text output")?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
