//! Display and output formatting for generations

use crate::config::OutputFormat;
use crate::game_of_life::{io, Cell, Generation};
use crate::simulation::SimulationError;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Format generations for display
pub struct GenerationFormatter;

impl GenerationFormatter {
    /// Format every living coordinate on one line, in sorted order
    pub fn format_cells(cells: &Generation) -> String {
        cells.iter().sorted().map(Cell::to_string).join(" ")
    }

    /// Render the bounding box of a generation as a text grid
    ///
    /// Rows run from the maximum to the minimum Y coordinate, columns from
    /// minimum to maximum X, with `X` for living cells and `-` for dead
    /// ones. An empty generation has no bounding box to draw.
    pub fn format_grid(cells: &Generation) -> Result<String, SimulationError> {
        if cells.is_empty() {
            return Err(SimulationError::EmptyGeneration);
        }

        let (mut min_x, mut max_x) = (i64::MAX, i64::MIN);
        let (mut min_y, mut max_y) = (i64::MAX, i64::MIN);
        for cell in cells {
            min_x = min_x.min(cell.x());
            max_x = max_x.max(cell.x());
            min_y = min_y.min(cell.y());
            max_y = max_y.max(cell.y());
        }

        let mut output = String::new();
        for y in (min_y..=max_y).rev() {
            let row = (min_x..=max_x)
                .map(|x| {
                    if cells.contains(&Cell::new(x, y)) {
                        'X'
                    } else {
                        '-'
                    }
                })
                .join(" ");
            output.push_str(&row);
            output.push('\n');
        }

        Ok(output)
    }

    /// Format the wall time of a single step
    pub fn format_runtime(elapsed: Duration) -> String {
        format!("Execution time: {:.3} milliseconds", elapsed.as_secs_f64() * 1000.0)
    }

    /// Save a final generation in the configured output format
    pub fn save_final_state<P: AsRef<Path>>(
        cells: &Generation,
        path: P,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Life106 => io::save_cells_to_file(cells, path),
            OutputFormat::Json => {
                let sorted: Vec<Cell> = cells.iter().copied().sorted().collect();
                let content =
                    serde_json::to_string_pretty(&sorted).context("Failed to serialize cells")?;

                if let Some(parent) = path.as_ref().parent() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }

                std::fs::write(&path, content).with_context(|| {
                    format!("Failed to write cell file: {}", path.as_ref().display())
                })?;

                Ok(())
            }
        }
    }
}

/// Writes per-step reports to an explicit output sink
///
/// The sink is injected rather than hard-wired to stdout so tests can
/// capture output without redirecting global console state.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print all living coordinates of a generation
    pub fn print_cells(&mut self, cells: &Generation) -> Result<()> {
        writeln!(self.out, "{}\n", GenerationFormatter::format_cells(cells))
            .context("Failed to write cell report")
    }

    /// Print a bounding-box grid of a generation
    pub fn print_grid(&mut self, cells: &Generation) -> Result<()> {
        let grid = GenerationFormatter::format_grid(cells)?;
        writeln!(self.out, "{}", grid).context("Failed to write grid report")
    }

    /// Print the elapsed wall time of the preceding step
    pub fn print_runtime(&mut self, elapsed: Duration) -> Result<()> {
        writeln!(self.out, "{}\n", GenerationFormatter::format_runtime(elapsed))
            .context("Failed to write runtime report")
    }

    /// Consume the reporter, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn generation(cells: &[(i64, i64)]) -> Generation {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_format_cells_sorted() {
        let cells = generation(&[(2, 0), (-1, 5), (0, 0)]);
        assert_eq!(
            GenerationFormatter::format_cells(&cells),
            "(-1, 5) (0, 0) (2, 0)"
        );
    }

    #[test]
    fn test_format_cells_empty() {
        assert_eq!(GenerationFormatter::format_cells(&Generation::new()), "");
    }

    #[test]
    fn test_format_grid_blinker() {
        let horizontal = generation(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(GenerationFormatter::format_grid(&horizontal).unwrap(), "X X X\n");

        let vertical = generation(&[(1, -1), (1, 0), (1, 1)]);
        assert_eq!(GenerationFormatter::format_grid(&vertical).unwrap(), "X\nX\nX\n");
    }

    #[test]
    fn test_format_grid_rows_top_down() {
        // A single diagonal renders max Y first
        let cells = generation(&[(0, 0), (1, 1)]);
        assert_eq!(GenerationFormatter::format_grid(&cells).unwrap(), "- X\nX -\n");
    }

    #[test]
    fn test_format_grid_empty_generation() {
        assert_eq!(
            GenerationFormatter::format_grid(&Generation::new()),
            Err(SimulationError::EmptyGeneration)
        );
    }

    #[test]
    fn test_format_runtime() {
        let formatted = GenerationFormatter::format_runtime(Duration::from_micros(1500));
        assert_eq!(formatted, "Execution time: 1.500 milliseconds");
    }

    #[test]
    fn test_reporter_writes_to_sink() {
        let mut reporter = Reporter::new(Vec::new());
        let cells = generation(&[(0, 0), (1, 0)]);

        reporter.print_cells(&cells).unwrap();
        reporter.print_grid(&cells).unwrap();
        reporter.print_runtime(Duration::from_millis(2)).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("(0, 0) (1, 0)"));
        assert!(output.contains("X X"));
        assert!(output.contains("Execution time: 2.000 milliseconds"));
    }

    #[test]
    fn test_reporter_grid_fails_on_empty() {
        let mut reporter = Reporter::new(Vec::new());
        assert!(reporter.print_grid(&Generation::new()).is_err());
    }

    #[test]
    fn test_save_final_state_formats() {
        let temp_dir = tempdir().unwrap();
        let cells = generation(&[(0, 0), (1, 1)]);

        let life_path = temp_dir.path().join("final.txt");
        GenerationFormatter::save_final_state(&cells, &life_path, OutputFormat::Life106).unwrap();
        let life_content = std::fs::read_to_string(&life_path).unwrap();
        assert!(life_content.starts_with("#Life 1.06"));

        let json_path = temp_dir.path().join("final.json");
        GenerationFormatter::save_final_state(&cells, &json_path, OutputFormat::Json).unwrap();
        let parsed: Vec<Cell> = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed, vec![Cell::new(0, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
