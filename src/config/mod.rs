//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    Settings, DisplayConfig, SimulationConfig, InputConfig, OutputConfig, RendererKind, CliOverrides
};
