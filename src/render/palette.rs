//! Age-based colour tiers and the palette mapping them to colours

use crate::game_of_life::Cell;
use serde::{Deserialize, Serialize};

/// Display tier of a cell, derived from its age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    Background,
    Newborn,
    Second,
    Third,
    Mature,
}

impl ColorTier {
    /// Tier a cell is drawn in. Seeded cells are alive with age 0 and
    /// count as newborn until their first tick.
    pub fn from_cell(cell: &Cell) -> Self {
        match (cell.alive, cell.age) {
            (false, _) => ColorTier::Background,
            (true, 0) => ColorTier::Newborn,
            (true, age) => ColorTier::from_age(age),
        }
    }

    pub fn from_age(age: u32) -> Self {
        match age {
            0 => ColorTier::Background,
            1 => ColorTier::Newborn,
            2 => ColorTier::Second,
            3 => ColorTier::Third,
            _ => ColorTier::Mature,
        }
    }

    /// Single-character glyph for text output
    pub fn glyph(self) -> char {
        match self {
            ColorTier::Background => '·',
            ColorTier::Newborn => '░',
            ColorTier::Second => '▒',
            ColorTier::Third => '▓',
            ColorTier::Mature => '█',
        }
    }
}

/// RGB colour per tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: [u8; 3],
    pub newborn: [u8; 3],
    pub second: [u8; 3],
    pub third: [u8; 3],
    pub mature: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            newborn: [255, 0, 0],
            second: [0, 255, 0],
            third: [0, 0, 255],
            mature: [255, 255, 255],
        }
    }
}

impl Palette {
    pub fn color(&self, tier: ColorTier) -> [u8; 3] {
        match tier {
            ColorTier::Background => self.background,
            ColorTier::Newborn => self.newborn,
            ColorTier::Second => self.second,
            ColorTier::Third => self.third,
            ColorTier::Mature => self.mature,
        }
    }
}
