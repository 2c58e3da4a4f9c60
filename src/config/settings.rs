//! Configuration settings for the sparse Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub reporting: ReportingConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
}

/// Per-step reporting toggles, read by the simulation loop between steps
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportingConfig {
    pub print_cells: bool,
    pub print_grid: bool,
    pub print_runtime: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub cell_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub save_final: bool,
    pub final_state_file: PathBuf,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Life106,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig { generations: 10 },
            reporting: ReportingConfig {
                print_cells: false,
                print_grid: true,
                print_runtime: false,
            },
            input: InputConfig {
                cell_file: PathBuf::from("input/patterns/glider.txt"),
            },
            output: OutputConfig {
                save_final: false,
                final_state_file: PathBuf::from("output/final_state.txt"),
                format: OutputFormat::Life106,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

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
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if !self.input.cell_file.exists() {
            anyhow::bail!("Cell file does not exist: {}", self.input.cell_file.display());
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref cell_file) = cli_overrides.cell_file {
            self.input.cell_file = cell_file.clone();
        }
        if let Some(ref final_state_file) = cli_overrides.final_state_file {
            self.output.final_state_file = final_state_file.clone();
            self.output.save_final = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub cell_file: Option<PathBuf>,
    pub final_state_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.generations, 10);
        assert!(settings.reporting.print_grid);
        assert!(!settings.reporting.print_cells);
        assert_eq!(settings.output.format, OutputFormat::Life106);
    }

    #[test]
    fn test_settings_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.simulation.generations = 42;
        settings.reporting.print_runtime = true;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.generations, 42);
        assert!(loaded.reporting.print_runtime);
    }

    #[test]
    fn test_validate_rejects_zero_generations() {
        let temp_dir = tempdir().unwrap();
        let cell_file = temp_dir.path().join("cells.txt");
        std::fs::write(&cell_file, "#Life 1.06\n0 0\n").unwrap();

        let mut settings = Settings::default();
        settings.input.cell_file = cell_file;
        assert!(settings.validate().is_ok());

        settings.simulation.generations = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_cell_file() {
        let mut settings = Settings::default();
        settings.input.cell_file = PathBuf::from("definitely/missing.txt");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            generations: Some(3),
            cell_file: Some(PathBuf::from("other.txt")),
            final_state_file: Some(PathBuf::from("final.txt")),
        };

        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.generations, 3);
        assert_eq!(settings.input.cell_file, PathBuf::from("other.txt"));
        assert_eq!(settings.output.final_state_file, PathBuf::from("final.txt"));
        assert!(settings.output.save_final);
    }
}
