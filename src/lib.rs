//! Conway's Game of Life simulator
//!
//! An edge-bounded grid engine with per-cell age tracking, pattern file
//! seeding, live-region centering and pluggable renderers.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod render;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::Grid;
pub use simulation::{SeedSource, Simulation};

use anyhow::Result;

/// Run a simulation described by `settings` until the pacer stops it
pub fn run_simulation(settings: &Settings, pacer: &mut dyn simulation::Pacer) -> Result<u64> {
    let interval = settings.simulation.interval()?;
    let seed = SeedSource::from_path(settings.input.pattern_file.clone());
    let renderer = render::create_renderer(settings.output.renderer);

    let mut simulation = Simulation::initialize(
        &settings.display,
        &settings.output.palette,
        &seed,
        renderer,
    )?;

    let result = simulation.run(
        interval,
        pacer,
        settings.simulation.max_generations,
    );
    let stopped = simulation.stop();
    let generation = result?;
    stopped?;
    Ok(generation)
}
