//! Renderers that present each generation
//!
//! The simulation only talks to the [`Renderer`] trait, so output backends can
//! be swapped without touching the engine.

pub mod palette;
pub mod terminal;
pub mod text;
pub mod json;

pub use palette::{ColorTier, Palette};
pub use terminal::TerminalRenderer;
pub use text::TextRenderer;
pub use json::JsonRenderer;

use crate::config::RendererKind;
use crate::game_of_life::Grid;
use anyhow::Result;
use tracing::debug;

/// Everything a renderer needs to set itself up
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub pixel_width: usize,
    pub pixel_height: usize,
    pub grid_width: usize,
    pub grid_height: usize,
    pub palette: Palette,
}

/// One generation handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub generation: u64,
    pub grid: &'a Grid,
}

/// Output backend for the simulation
pub trait Renderer {
    /// Prepare the output surface
    fn initialize(&mut self, config: &RenderConfig) -> Result<()>;

    /// Present a generation
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Release the output surface
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer that draws nothing, for benchmarking and batch runs
#[derive(Debug, Default)]
pub struct HeadlessRenderer;

impl Renderer for HeadlessRenderer {
    fn initialize(&mut self, config: &RenderConfig) -> Result<()> {
        debug!(width = config.grid_width, height = config.grid_height, "headless renderer ready");
        Ok(())
    }

    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        debug!(generation = frame.generation, population = frame.grid.living_count(), "generation");
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Create a renderer for the configured backend, writing to stdout
pub fn create_renderer(kind: RendererKind) -> Box<dyn Renderer> {
    match kind {
        RendererKind::Terminal => Box::new(TerminalRenderer::new()),
        RendererKind::Text => Box::new(TextRenderer::new(std::io::stdout())),
        RendererKind::Json => Box::new(JsonRenderer::new(std::io::stdout())),
        RendererKind::Headless => Box::new(HeadlessRenderer),
    }
}
