//! Main CLI application for the sparse Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sparse::{
    config::{CliOverrides, ReportingConfig, Settings},
    game_of_life::{create_example_patterns, load_cells_from_file},
    utils::{ColorOutput, GenerationFormatter},
    Simulation,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_sparse")]
#[command(about = "Sparse Game of Life simulator on an unbounded plane")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a cell file
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Cell file in Life 1.06 format (overrides config)
        #[arg(short = 'f', long)]
        cells: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Save the final state to this file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Prompt for the reporting flags instead of reading them from config
        #[arg(short, long)]
        interactive: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
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

    /// Show a cell file as a grid with statistics
    Inspect {
        /// Cell file in Life 1.06 format
        cells: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            cells,
            generations,
            output,
            interactive,
            verbose,
        } => run_command(config, cells, generations, output, interactive, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Inspect { cells } => inspect_command(cells),
    }
}

fn run_command(
    config_path: PathBuf,
    cell_file: Option<PathBuf>,
    generations: Option<usize>,
    output_file: Option<PathBuf>,
    interactive: bool,
    verbose: bool,
) -> Result<()> {
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

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        generations,
        cell_file,
        final_state_file: output_file,
    };
    settings.merge_with_cli(&cli_overrides);

    if interactive {
        let stdin = io::stdin();
        settings.reporting = prompt_reporting_config(&mut stdin.lock())?;
    }

    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Cell file: {}", settings.input.cell_file.display());
        println!("  Print cells: {}", settings.reporting.print_cells);
        println!("  Print grid: {}", settings.reporting.print_grid);
        println!("  Print runtime: {}", settings.reporting.print_runtime);
        println!();
    }

    let initial = load_cells_from_file(&settings.input.cell_file)
        .with_context(|| format!("Failed to load {}", settings.input.cell_file.display()))?;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Loaded {} living cell(s) from {}",
            initial.len(),
            settings.input.cell_file.display()
        ))
    );

    let start_time = Instant::now();
    let mut simulation = Simulation::with_stdout(settings.reporting);
    let final_generation = simulation.run(settings.simulation.generations, initial)?;
    let total_time = start_time.elapsed();

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Simulation finished: {} generation(s), {} living cell(s) in {:.3}s",
            settings.simulation.generations,
            final_generation.len(),
            total_time.as_secs_f64()
        ))
    );

    if settings.output.save_final {
        GenerationFormatter::save_final_state(
            &final_generation,
            &settings.output.final_state_file,
            settings.output.format,
        )
        .context("Failed to save final state")?;

        println!(
            "{}",
            ColorOutput::success(&format!(
                "Final state saved to {}",
                settings.output.final_state_file.display()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/patterns");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

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

    create_example_patterns(&input_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", input_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // Short observation run printing everything after each step
    let mut observe_config = Settings::default();
    observe_config.simulation.generations = 5;
    observe_config.reporting.print_cells = true;
    observe_config.reporting.print_runtime = true;
    observe_config.input.cell_file = PathBuf::from("input/patterns/blinker.txt");
    observe_config.to_file(&examples_dir.join("observe.yaml"))?;

    // Longer silent run that saves the final state
    let mut batch_config = Settings::default();
    batch_config.simulation.generations = 100;
    batch_config.reporting.print_grid = false;
    batch_config.output.save_final = true;
    batch_config.to_file(&examples_dir.join("batch.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", input_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn inspect_command(cell_path: PathBuf) -> Result<()> {
    let cells = load_cells_from_file(&cell_path)
        .with_context(|| format!("Failed to load {}", cell_path.display()))?;

    println!(
        "Pattern {} ({} living cells):",
        cell_path.display(),
        cells.len()
    );

    if cells.is_empty() {
        println!("{}", ColorOutput::warning("Pattern is empty, nothing to draw"));
        return Ok(());
    }

    match GenerationFormatter::format_grid(&cells) {
        Ok(grid) => println!("{}", grid),
        Err(err) => println!("{}", ColorOutput::error(&err.to_string())),
    }

    let (mut min_x, mut max_x) = (i64::MAX, i64::MIN);
    let (mut min_y, mut max_y) = (i64::MAX, i64::MIN);
    for cell in &cells {
        min_x = min_x.min(cell.x());
        max_x = max_x.max(cell.x());
        min_y = min_y.min(cell.y());
        max_y = max_y.max(cell.y());
    }

    // Extents in i128 so a pattern spanning the whole axis still reports
    let width = max_x as i128 - min_x as i128 + 1;
    let height = max_y as i128 - min_y as i128 + 1;

    println!("Statistics:");
    println!("  X range: {} to {} ({} columns)", min_x, max_x, width);
    println!("  Y range: {} to {} ({} rows)", min_y, max_y, height);

    Ok(())
}

fn prompt_reporting_config<R: BufRead>(input: &mut R) -> Result<ReportingConfig> {
    Ok(ReportingConfig {
        print_cells: prompt_yes_no(
            input,
            "Would you like to print the living cells after each generation?",
        )?,
        print_grid: prompt_yes_no(input, "Would you like to print the grid after each generation?")?,
        print_runtime: prompt_yes_no(
            input,
            "Would you like to track and print the runtime of each generation?",
        )?,
    })
}

/// Ask a y/n question, re-prompting until one of the two answers is given
fn prompt_yes_no<R: BufRead>(input: &mut R, question: &str) -> Result<bool> {
    loop {
        print!("{} (y/n): ", question);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("Input ended before an answer was given");
        }

        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {}
        }
    }
}
