//! Configuration settings for the Game of Life simulator

use crate::game_of_life::MAX_GRID_CELLS;
use crate::render::Palette;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub display: DisplayConfig,
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Pixel surface and the pixels-per-cell scale used to size the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub pixel_width: usize,
    pub pixel_height: usize,
    pub scale: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Delay between generations, in seconds
    pub interval_seconds: f64,
    /// Stop after this many generations; run until interrupted when unset
    #[serde(default)]
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Pattern file to seed from; the built-in line is used when unset
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub renderer: RendererKind,
    #[serde(default)]
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    Terminal,
    Text,
    Json,
    Headless,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                pixel_width: 640,
                pixel_height: 480,
                scale: 4,
            },
            simulation: SimulationConfig {
                interval_seconds: 1.0,
                max_generations: None,
            },
            input: InputConfig::default(),
            output: OutputConfig {
                renderer: RendererKind::Terminal,
                palette: Palette::default(),
            },
        }
    }
}

impl DisplayConfig {
    /// Grid dimensions covered by the display; leftover pixels are not covered
    pub fn grid_dimensions(&self) -> (usize, usize) {
        if self.scale == 0 {
            return (0, 0);
        }
        (self.pixel_width / self.scale, self.pixel_height / self.scale)
    }
}

impl SimulationConfig {
    /// Delay between generations; fails for negative, NaN or out-of-range values
    pub fn interval(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.interval_seconds).with_context(|| {
            format!(
                "Generation interval must be a non-negative number of seconds, got {}",
                self.interval_seconds
            )
        })
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.display.scale == 0 {
            anyhow::bail!("Scale must be positive");
        }

        let (width, height) = self.display.grid_dimensions();
        if width == 0 || height == 0 {
            anyhow::bail!(
                "Display {}x{} at scale {} leaves no room for a grid",
                self.display.pixel_width,
                self.display.pixel_height,
                self.display.scale
            );
        }
        if width.checked_mul(height).map_or(true, |area| area > MAX_GRID_CELLS) {
            anyhow::bail!(
                "Display {}x{} at scale {} gives a {}x{} grid, more than {} cells",
                self.display.pixel_width,
                self.display.pixel_height,
                self.display.scale,
                width,
                height,
                MAX_GRID_CELLS
            );
        }

        self.simulation.interval()?;

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(interval) = cli_overrides.interval_seconds {
            self.simulation.interval_seconds = interval;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(max_generations);
        }
        if let Some(scale) = cli_overrides.scale {
            self.display.scale = scale;
        }
        if let Some(pixel_width) = cli_overrides.pixel_width {
            self.display.pixel_width = pixel_width;
        }
        if let Some(pixel_height) = cli_overrides.pixel_height {
            self.display.pixel_height = pixel_height;
        }
        if let Some(renderer) = cli_overrides.renderer {
            self.output.renderer = renderer;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pattern_file: Option<PathBuf>,
    pub interval_seconds: Option<f64>,
    pub max_generations: Option<u64>,
    pub scale: Option<usize>,
    pub pixel_width: Option<usize>,
    pub pixel_height: Option<usize>,
    pub renderer: Option<RendererKind>,
}
