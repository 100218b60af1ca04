//! Simulation driver: owns the grid and feeds each generation to a renderer

use super::centering::center_on_live_cells;
use super::pacer::{Control, Pacer};
use super::seed::SeedSource;
use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use crate::render::{Frame, Palette, RenderConfig, Renderer};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info};

/// One simulation lifecycle: seed, centre, then tick until stopped
pub struct Simulation {
    grid: Grid,
    renderer: Box<dyn Renderer>,
    generation: u64,
    stopped: bool,
}

impl Simulation {
    /// Build the grid for `display_config`, seed and centre it, then show generation 0.
    ///
    /// The grid is `pixel_width / scale` by `pixel_height / scale` cells;
    /// leftover pixels are simply not covered.
    pub fn initialize(
        display_config: &DisplayConfig,
        palette: &Palette,
        seed: &SeedSource,
        mut renderer: Box<dyn Renderer>,
    ) -> Result<Self> {
        let (width, height) = display_config.grid_dimensions();
        let mut grid = Grid::new(width, height)?;
        info!(width, height, scale = display_config.scale, "created grid");

        seed.apply(&mut grid).context("Failed to seed initial generation")?;
        let (dx, dy) = center_on_live_cells(&mut grid);
        debug!(dx, dy, population = grid.living_count(), "centred live cells");

        renderer
            .initialize(&RenderConfig {
                pixel_width: display_config.pixel_width,
                pixel_height: display_config.pixel_height,
                grid_width: width,
                grid_height: height,
                palette: palette.clone(),
            })
            .context("Failed to initialize renderer")?;

        let mut simulation = Self {
            grid,
            renderer,
            generation: 0,
            stopped: false,
        };
        simulation.draw()?;
        Ok(simulation)
    }

    fn draw(&mut self) -> Result<()> {
        self.renderer.draw(&Frame {
            generation: self.generation,
            grid: &self.grid,
        })
    }

    /// Advance one generation and render it. Does nothing once stopped.
    pub fn tick(&mut self) -> Result<()> {
        if self.stopped {
            debug!("tick after stop ignored");
            return Ok(());
        }

        self.grid.advance();
        self.generation += 1;
        self.draw()
            .with_context(|| format!("Failed to render generation {}", self.generation))
    }

    /// Wait `interval` then tick, until the pacer asks to stop or
    /// `max_generations` is reached. Returns the final generation number.
    pub fn run(
        &mut self,
        interval: Duration,
        pacer: &mut dyn Pacer,
        max_generations: Option<u64>,
    ) -> Result<u64> {
        info!(interval_seconds = interval.as_secs_f64(), ?max_generations, "running simulation");

        while !self.stopped {
            if max_generations.is_some_and(|limit| self.generation >= limit) {
                info!(generation = self.generation, "generation limit reached");
                break;
            }
            if pacer.wait(interval)? == Control::Stop {
                info!(generation = self.generation, "stop requested");
                break;
            }
            self.tick()?;
        }

        Ok(self.generation)
    }

    /// Release the renderer. Safe to call more than once.
    pub fn stop(&mut self) -> Result<()> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;
        self.renderer.cleanup().context("Failed to clean up renderer")
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use crate::utils::GridFormatter;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Recording {
        config: Option<RenderConfig>,
        frames: Vec<(u64, Vec<(usize, usize)>)>,
        shaded: Vec<String>,
        cleanups: usize,
    }

    struct RecordingRenderer(Rc<RefCell<Recording>>);

    impl Renderer for RecordingRenderer {
        fn initialize(&mut self, config: &RenderConfig) -> Result<()> {
            self.0.borrow_mut().config = Some(config.clone());
            Ok(())
        }

        fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
            let mut recording = self.0.borrow_mut();
            recording.frames.push((frame.generation, frame.grid.living_cells()));
            recording.shaded.push(GridFormatter::format_grid_compact(frame.grid));
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.0.borrow_mut().cleanups += 1;
            Ok(())
        }
    }

    fn display(pixel_width: usize, pixel_height: usize, scale: usize) -> DisplayConfig {
        DisplayConfig { pixel_width, pixel_height, scale }
    }

    fn start(
        display: &DisplayConfig,
        seed: SeedSource,
    ) -> Result<(Simulation, Rc<RefCell<Recording>>)> {
        let recording = Rc::new(RefCell::new(Recording::default()));
        let renderer = Box::new(RecordingRenderer(Rc::clone(&recording)));
        let simulation = Simulation::initialize(display, &Palette::default(), &seed, renderer)?;
        Ok((simulation, recording))
    }

    #[test]
    fn test_initialize_sizes_grid_and_draws_generation_zero() {
        let (simulation, recording) = start(&display(643, 482, 4), SeedSource::Default).unwrap();

        assert_eq!(simulation.grid().width(), 160);
        assert_eq!(simulation.grid().height(), 120);
        assert_eq!(simulation.generation(), 0);

        let recording = recording.borrow();
        let config = recording.config.as_ref().unwrap();
        assert_eq!((config.grid_width, config.grid_height), (160, 120));
        assert_eq!((config.pixel_width, config.pixel_height), (643, 482));
        assert_eq!(recording.frames.len(), 1);
        assert_eq!(recording.frames[0].0, 0);
        assert_eq!(recording.frames[0].1.len(), 20);
    }

    #[test]
    fn test_default_seed_is_centred() {
        let (simulation, _) = start(&display(640, 480, 4), SeedSource::Default).unwrap();
        let bounds = simulation.grid().bounding_box_of_live_cells();
        let grid = simulation.grid();

        assert!(bounds.x_min.abs_diff(grid.width() - 1 - bounds.x_max) <= 1);
        assert!(bounds.y_min.abs_diff(grid.height() - 1 - bounds.y_max) <= 1);
        assert_eq!(bounds.width(), 20);
        assert_eq!(bounds.height(), 1);
    }

    #[test]
    fn test_zero_scale_is_invalid_dimension() {
        let err = start(&display(640, 480, 0), SeedSource::Default).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_too_wide_pattern_aborts_startup() {
        let seed = SeedSource::Text("OOOOOOOOOOOO\n".to_string());
        let err = start(&display(40, 40, 4), seed).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::PatternTooWide { pattern_width: 12, grid_width: 10 })
        ));
    }

    #[test]
    fn test_generation_zero_shows_seed() {
        let seed = SeedSource::Text("OOO\n".to_string());
        let (mut simulation, recording) = start(&display(5, 3, 1), seed).unwrap();

        assert_eq!(recording.borrow().shaded[0], "·····\n·░░░·\n·····\n");

        simulation.tick().unwrap();
        assert_eq!(recording.borrow().shaded[1], "··░··\n··░··\n··░··\n");
    }

    #[test]
    fn test_tick_advances_and_renders() {
        let seed = SeedSource::Text("OOO\n".to_string());
        let (mut simulation, recording) = start(&display(9, 9, 1), seed).unwrap();

        // Centred horizontal blinker on a 9x9 grid
        assert_eq!(simulation.grid().living_cells(), vec![(3, 4), (4, 4), (5, 4)]);

        simulation.tick().unwrap();
        assert_eq!(simulation.generation(), 1);
        assert_eq!(simulation.grid().living_cells(), vec![(4, 3), (4, 4), (4, 5)]);

        simulation.tick().unwrap();
        let recording = recording.borrow();
        assert_eq!(recording.frames.len(), 3);
        assert_eq!(recording.frames[2], (2, vec![(3, 4), (4, 4), (5, 4)]));
    }

    #[test]
    fn test_run_until_pacer_stops() {
        let (mut simulation, recording) = start(&display(20, 20, 1), SeedSource::Default).unwrap();

        let mut waits = 0;
        let mut pacer = |interval: Duration| -> Result<Control> {
            assert_eq!(interval, Duration::from_millis(5));
            waits += 1;
            Ok(if waits > 3 { Control::Stop } else { Control::Continue })
        };

        let last = simulation.run(Duration::from_millis(5), &mut pacer, None).unwrap();
        assert_eq!(last, 3);
        assert_eq!(recording.borrow().frames.len(), 4);
    }

    #[test]
    fn test_run_respects_generation_limit() {
        let (mut simulation, _) = start(&display(20, 20, 1), SeedSource::Default).unwrap();
        let mut pacer = |_: Duration| -> Result<Control> { Ok(Control::Continue) };

        assert_eq!(simulation.run(Duration::ZERO, &mut pacer, Some(5)).unwrap(), 5);
        assert_eq!(simulation.run(Duration::ZERO, &mut pacer, Some(5)).unwrap(), 5);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut simulation, recording) = start(&display(10, 10, 1), SeedSource::Default).unwrap();

        simulation.stop().unwrap();
        simulation.stop().unwrap();
        assert!(simulation.is_stopped());

        simulation.tick().unwrap();
        assert_eq!(simulation.generation(), 0);

        drop(simulation);
        let recording = recording.borrow();
        assert_eq!(recording.cleanups, 1);
        assert_eq!(recording.frames.len(), 1);
    }

    #[test]
    fn test_drop_cleans_up() {
        let (simulation, recording) = start(&display(10, 10, 1), SeedSource::Default).unwrap();
        drop(simulation);
        assert_eq!(recording.borrow().cleanups, 1);
    }

    #[test]
    fn test_identical_runs_are_identical() {
        let seed = SeedSource::Text(".O.\n..O\nOOO\n".to_string());
        let (mut a, rec_a) = start(&display(30, 30, 1), seed.clone()).unwrap();
        let (mut b, rec_b) = start(&display(30, 30, 1), seed).unwrap();

        for _ in 0..12 {
            a.tick().unwrap();
            b.tick().unwrap();
        }
        assert_eq!(rec_a.borrow().frames, rec_b.borrow().frames);
        assert_eq!(a.grid(), b.grid());
    }
}
