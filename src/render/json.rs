//! JSON-lines renderer, one object per generation

use super::{Frame, RenderConfig, Renderer};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Serialized form of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub population: usize,
    pub cells: Vec<CellRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: usize,
    pub y: usize,
    pub age: u32,
}

impl FrameRecord {
    pub fn from_frame(frame: &Frame<'_>) -> Self {
        let cells: Vec<CellRecord> = frame
            .grid
            .rows()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.alive)
                    .map(move |(x, cell)| CellRecord { x, y, age: cell.age })
            })
            .collect();

        Self {
            generation: frame.generation,
            width: frame.grid.width(),
            height: frame.grid.height(),
            population: cells.len(),
            cells,
        }
    }
}

/// Writes each generation as a single JSON line
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn initialize(&mut self, _config: &RenderConfig) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let record = FrameRecord::from_frame(frame);
        serde_json::to_writer(&mut self.out, &record).context("Failed to serialize frame")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
