//! Main CLI application for the bounded Game of Life simulator

use anyhow::{Context, Result};
use bounded_life::{
    config::{CliOverrides, Settings},
    life::{create_example_patterns, load_pattern_from_file, GenerationEngine},
    runner::{RunReport, Simulation},
    utils::{ColorOutput, ReportFormatter},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "bounded_life")]
#[command(about = "Bounded-grid Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation for a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Tick interval in milliseconds (overrides config)
        #[arg(short, long)]
        tick_interval: Option<f64>,

        /// Seed pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of generations to simulate
        #[arg(short, long, default_value_t = 100)]
        generations: usize,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show every generation instead of initial/final states
        #[arg(long)]
        show_evolution: bool,

        /// Pace generations from wall-clock time through the ticker
        #[arg(long)]
        realtime: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a pattern file
    Analyze {
        /// Pattern file to analyze
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations to evolve during analysis
        #[arg(short, long, default_value_t = 16)]
        generations: usize,
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
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            tick_interval,
            pattern,
            generations,
            output,
            show_evolution,
            realtime,
            verbose,
        } => run_command(
            config,
            CliOverrides {
                width,
                height,
                tick_interval_ms: tick_interval,
                pattern_file: pattern,
                output_dir: output,
            },
            generations,
            show_evolution,
            realtime,
            verbose,
        ),
        Commands::Analyze {
            pattern,
            generations,
        } => analyze_command(pattern, generations),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    cli_overrides: CliOverrides,
    generations: usize,
    show_evolution: bool,
    realtime: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("🔄 Starting bounded Game of Life"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.width, settings.grid.height);
        println!("  Tick interval: {}ms", settings.timing.tick_interval_ms);
        match settings.input.pattern_file {
            Some(ref file) => println!("  Seed pattern: {}", file.display()),
            None => println!("  Seed pattern: none (empty grid)"),
        }
        println!(
            "  Output dir: {}",
            settings.output.output_directory.display()
        );
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let mut report = if realtime {
        run_realtime(&settings, generations)?
    } else {
        bounded_life::run_simulation(&settings, generations)?
    };
    let total_time = start_time.elapsed();

    println!(
        "{}",
        ColorOutput::success(&format!(
            "✅ Simulated {} generation(s) in {:.3}s",
            report.generations,
            total_time.as_secs_f64()
        ))
    );

    println!("\n{}", ReportFormatter::format_report(&report, show_evolution));

    if verbose {
        println!("{}", ReportFormatter::format_history_table(&report));
    }

    // Save the report
    println!("\n{}", ColorOutput::info("💾 Saving report..."));
    if !settings.output.save_states {
        report.trim_snapshots();
    }
    ReportFormatter::save_report(
        &report,
        &settings.output.output_directory,
        &settings.output.format,
    )
    .context("Failed to save report")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Report saved to {}",
            settings.output.output_directory.display()
        ))
    );

    Ok(())
}

/// Drive the session from wall-clock time, the way an interactive host
/// loop would, instead of advancing directly
fn run_realtime(settings: &Settings, generations: usize) -> Result<RunReport> {
    let mut simulation = Simulation::new(settings)?;
    simulation.set_running(true);

    let mut report = RunReport::begin(simulation.engine());
    let mut last = Instant::now();

    while simulation.engine().generation() < generations as u64 {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_secs_f64() * 1000.0;
        last = now;

        if simulation.step(elapsed_ms).is_some() {
            report.record(simulation.engine());
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    report.finish();
    Ok(report)
}

fn analyze_command(pattern_path: PathBuf, generations: usize) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing pattern..."));

    let pattern = load_pattern_from_file(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!("Pattern Grid ({}x{}):", pattern.width, pattern.height);
    println!("{}", ReportFormatter::format_grid_with_coords(&pattern));

    println!("Grid Statistics:");
    println!("  Living cells: {}", pattern.living_count());
    println!(
        "  Density: {:.1}%",
        (pattern.living_count() as f64 / (pattern.width * pattern.height) as f64) * 100.0
    );

    // Evolve the pattern in a universe of its own dimensions
    let mut engine = GenerationEngine::new(pattern.width, pattern.height)
        .context("Failed to create engine for analysis")?;
    engine.stamp(&pattern, 0, 0);

    let report = RunReport::run(&mut engine, generations);

    println!("\nEvolution over {} generation(s):", report.generations);
    println!("{}", ReportFormatter::format_history_table(&report));

    match report.analysis.period {
        Some(period) => println!(
            "Classification: {} (period {})",
            report.analysis.classification(),
            period
        ),
        None => println!("Classification: {}", report.analysis.classification()),
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    // Create directories
    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");
    let output_dir = directory.join("output/runs");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example patterns
    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // Create example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // Small grid seeded with a blinker
    let mut blinker_config = Settings::default();
    blinker_config.grid.width = 20;
    blinker_config.grid.height = 20;
    blinker_config.timing.tick_interval_ms = 50.0;
    blinker_config.input.pattern_file = Some(PathBuf::from("patterns/blinker.txt"));
    blinker_config.to_file(&examples_dir.join("blinker.yaml"))?;

    // Glider with room to travel
    let mut glider_config = Settings::default();
    glider_config.grid.width = 30;
    glider_config.grid.height = 30;
    glider_config.timing.tick_interval_ms = 25.0;
    glider_config.input.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider_config.to_file(&examples_dir.join("glider.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your seed patterns to {}", patterns_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "bounded_life",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--width",
            "20",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
        assert!(temp_dir.path().join("config/examples/glider.yaml").exists());
    }

    #[test]
    fn test_run_command_writes_report() {
        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("runs");

        let result = run_command(
            temp_dir.path().join("missing.yaml"),
            CliOverrides {
                width: Some(10),
                height: Some(10),
                output_dir: Some(output_dir.clone()),
                ..Default::default()
            },
            3,
            false,
            false,
            false,
        );

        assert!(result.is_ok());
        assert!(output_dir.join("report.txt").exists());
    }
}
