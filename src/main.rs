//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, RendererKind, Settings},
    game_of_life::{
        create_example_patterns, load_pattern_from_file, save_pattern_to_file, GameOfLifeRules, Grid,
    },
    run_simulation,
    simulation::{center_on_live_cells, KeyboardPacer, Pacer, SleepPacer},
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Pattern file to seed from
        #[arg(conflicts_with = "pattern")]
        pattern_path: Option<PathBuf>,

        /// Pattern file to seed from (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seconds between generations (overrides config)
        #[arg(short, long)]
        delay: Option<f64>,

        /// Pixels per cell (overrides config)
        #[arg(short, long)]
        scale: Option<usize>,

        /// Display width in pixels (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Display height in pixels (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Output backend (overrides config)
        #[arg(short, long, value_enum)]
        renderer: Option<RendererKind>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Load a pattern, centre it and print the grid
    Inspect {
        /// Pattern file to inspect
        pattern: PathBuf,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pixels per cell (overrides config)
        #[arg(short, long)]
        scale: Option<usize>,

        /// Display width in pixels (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Display height in pixels (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Generations to advance before printing
        #[arg(long, default_value_t = 0)]
        steps: usize,

        /// Save the resulting grid as a pattern file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = dispatch(cli.command) {
        eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", err)));
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            pattern_path, pattern, config, delay, scale, width, height,
            renderer, generations
        } => {
            let overrides = CliOverrides {
                pattern_file: pattern.or(pattern_path),
                interval_seconds: delay,
                max_generations: generations,
                scale,
                pixel_width: width,
                pixel_height: height,
                renderer,
            };
            run_command(config, overrides)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Inspect { pattern, config, scale, width, height, steps, output } => {
            let overrides = CliOverrides {
                scale,
                pixel_width: width,
                pixel_height: height,
                ..CliOverrides::default()
            };
            inspect_command(config, pattern, overrides, steps, output)
        }
    }
}

/// Filter used when `RUST_LOG` is unset; warn keeps the terminal renderer clean
fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "game_of_life_sim=warn",
        1 => "game_of_life_sim=info",
        _ => "game_of_life_sim=debug",
    }
}

fn init_logging(verbose: u8) {
    let default_filter = default_log_filter(verbose);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        tracing::info!("config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    // Raw mode from the terminal renderer delivers quit keys as events
    let mut pacer: Box<dyn Pacer> = match settings.output.renderer {
        RendererKind::Terminal => Box::new(KeyboardPacer),
        _ => Box::new(SleepPacer),
    };

    let start_time = Instant::now();
    let generation = run_simulation(&settings, pacer.as_mut())
        .context("Simulation failed")?;

    eprintln!("{}", ColorOutput::success(&format!(
        "Stopped after {} generation(s) in {:.1}s",
        generation,
        start_time.elapsed().as_secs_f64()
    )));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)",
            config_path.display()
        )));
    }

    create_example_patterns(&pattern_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // Glider in plain text, fast enough to watch scroll by
    let mut glider_config = Settings::default();
    glider_config.display.scale = 16;
    glider_config.simulation.interval_seconds = 0.2;
    glider_config.simulation.max_generations = Some(100);
    glider_config.input.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider_config.output.renderer = RendererKind::Text;
    glider_config.to_file(&examples_dir.join("glider.yaml"))?;

    // Batch run of the default line
    let mut batch_config = Settings::default();
    batch_config.simulation.interval_seconds = 0.0;
    batch_config.simulation.max_generations = Some(1000);
    batch_config.output.renderer = RendererKind::Headless;
    batch_config.to_file(&examples_dir.join("batch.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", pattern_dir.display());
    println!("3. Run: cargo run -- run patterns/glider.txt");

    Ok(())
}

fn inspect_command(
    config_path: PathBuf,
    pattern_path: PathBuf,
    overrides: CliOverrides,
    steps: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    let (width, height) = settings.display.grid_dimensions();
    let mut grid = Grid::new(width, height)?;

    let pattern = load_pattern_from_file(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;
    pattern.apply(&mut grid)
        .with_context(|| format!("Pattern {} does not fit the grid", pattern_path.display()))?;

    println!("{}", ColorOutput::info(&format!(
        "Pattern {} ({}x{}, {} live cells)",
        pattern_path.display(),
        pattern.width,
        pattern.height,
        pattern.live_cells.len()
    )));

    let (dx, dy) = center_on_live_cells(&mut grid);
    println!("Centred by ({}, {})", dx, dy);

    let grid = GameOfLifeRules::evolve_generations(grid, steps);

    println!("\nGeneration {}:", steps);
    println!("{}", GridFormatter::format_grid_with_coords(&grid));
    print!("{}", GridFormatter::format_statistics(&grid));

    if let Some(output_path) = output {
        save_pattern_to_file(&grid, &output_path)
            .with_context(|| format!("Failed to save pattern to {}", output_path.display()))?;
        println!("{}", ColorOutput::success(&format!("Saved: {}", output_path.display())));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(&[
            "game_of_life_sim",
            "run",
            "patterns/glider.txt",
            "--delay", "0.5",
            "--renderer", "text",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(&["game_of_life_sim", "-vv", "run", "-p", "glider.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Run { pattern, pattern_path, delay, .. } => {
                assert_eq!(pattern, Some(PathBuf::from("glider.txt")));
                assert!(pattern_path.is_none());
                assert!(delay.is_none());
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(0), "game_of_life_sim=warn");
        assert_eq!(default_log_filter(1), "game_of_life_sim=info");
        assert_eq!(default_log_filter(2), "game_of_life_sim=debug");
        assert_eq!(default_log_filter(5), "game_of_life_sim=debug");
    }

    #[test]
    fn test_cli_rejects_two_patterns() {
        let cli = Cli::try_parse_from(&["game_of_life_sim", "run", "a.txt", "--pattern", "b.txt"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/glider.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());

        let loaded = Settings::from_file(&temp_dir.path().join("config/examples/glider.yaml")).unwrap();
        assert_eq!(loaded.output.renderer, RendererKind::Text);
    }

    #[test]
    fn test_inspect_command() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        let overrides = CliOverrides {
            pixel_width: Some(12),
            pixel_height: Some(12),
            scale: Some(1),
            ..CliOverrides::default()
        };
        let result = inspect_command(
            temp_dir.path().join("missing.yaml"),
            temp_dir.path().join("glider.txt"),
            overrides,
            4,
            Some(temp_dir.path().join("out/glider_4.txt")),
        );
        assert!(result.is_ok());

        // Four generations on: the same glider, centred and moved one cell diagonally
        let saved = load_pattern_from_file(temp_dir.path().join("out/glider_4.txt")).unwrap();
        assert_eq!(saved.live_cells.len(), 5);
        assert_eq!((saved.width, saved.height), (12, 12));

        let overrides = CliOverrides {
            pixel_width: Some(12),
            pixel_height: Some(12),
            scale: Some(1),
            ..CliOverrides::default()
        };
        let too_wide = inspect_command(
            temp_dir.path().join("missing.yaml"),
            temp_dir.path().join("line.txt"),
            overrides,
            0,
            None,
        );
        assert!(too_wide.is_err());
    }
}
