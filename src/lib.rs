//! Sparse Game of Life simulator
//!
//! This library simulates Conway's Game of Life on an unbounded plane of
//! signed 64-bit coordinates, tracking only the living cells.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, GameOfLifeRules, Generation};
pub use simulation::{Simulation, SimulationError};

use anyhow::{Context, Result};

/// Main entry point: load the configured cell file and run the simulation
/// with reports going to standard output
pub fn run_simulation(settings: &Settings) -> Result<Generation> {
    let initial = game_of_life::load_cells_from_file(&settings.input.cell_file)
        .with_context(|| {
            format!(
                "Failed to load cells from {}",
                settings.input.cell_file.display()
            )
        })?;

    let mut simulation = Simulation::with_stdout(settings.reporting);
    let final_generation = simulation.run(settings.simulation.generations, initial)?;
    Ok(final_generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_simulation_from_settings() {
        let temp_dir = tempdir().unwrap();
        let cell_file = temp_dir.path().join("blinker.txt");
        std::fs::write(&cell_file, "#Life 1.06\n0 0\n1 0\n2 0\n").unwrap();

        let mut settings = Settings::default();
        settings.input.cell_file = cell_file;
        settings.simulation.generations = 2;
        settings.reporting.print_grid = false;

        let final_generation = run_simulation(&settings).unwrap();

        let expected: Generation = [Cell::new(1, -1), Cell::new(1, 0), Cell::new(1, 1)]
            .into_iter()
            .collect();
        assert_eq!(final_generation, expected);
    }
}
