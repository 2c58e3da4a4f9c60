//! File I/O for Life 1.06 cell lists

use super::{Cell, Generation};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;

/// Format marker required on the first non-blank line of a cell file
pub const LIFE_106_HEADER: &str = "#Life 1.06";

/// Load a generation from a Life 1.06 text file
///
/// Format: a `#Life 1.06` marker line, then one `x y` coordinate pair per
/// line. Blank lines and `#` comments are skipped.
pub fn load_cells_from_file<P: AsRef<Path>>(path: P) -> Result<Generation> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read cell file: {}", path.as_ref().display()))?;

    parse_cells_from_str(&content)
        .with_context(|| format!("Failed to parse cell file: {}", path.as_ref().display()))
}

/// Parse a generation from a string in Life 1.06 format
///
/// Malformed coordinate lines are skipped with a warning rather than
/// aborting the load; a missing format marker rejects the whole input.
pub fn parse_cells_from_str(content: &str) -> Result<Generation> {
    let mut lines = content.lines().map(str::trim);

    match lines.find(|line| !line.is_empty()) {
        Some(header) if header == LIFE_106_HEADER => {}
        Some(header) => anyhow::bail!(
            "Invalid file format. Expected '{}' as first line, found '{}'",
            LIFE_106_HEADER,
            header
        ),
        None => anyhow::bail!("Invalid file format. Expected '{}' as first line", LIFE_106_HEADER),
    }

    let mut cells = Generation::new();
    for line in lines {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            eprintln!("Warning: ignoring invalid line: {}", line);
            continue;
        }

        match (parts[0].parse::<i64>(), parts[1].parse::<i64>()) {
            (Ok(x), Ok(y)) => {
                cells.insert(Cell::new(x, y));
            }
            _ => eprintln!("Warning: invalid coordinates: {}", line),
        }
    }

    Ok(cells)
}

/// Save a generation to a Life 1.06 text file
pub fn save_cells_to_file<P: AsRef<Path>>(cells: &Generation, path: P) -> Result<()> {
    let content = cells_to_string(cells);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write cell file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a generation to its Life 1.06 representation
///
/// Cells are written in sorted order so the output is stable across runs.
pub fn cells_to_string(cells: &Generation) -> String {
    let mut content = String::from(LIFE_106_HEADER);
    content.push('\n');

    for cell in cells.iter().sorted() {
        content.push_str(&format!("{} {}\n", cell.x(), cell.y()));
    }

    content
}

/// Create example pattern files for testing and setup
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider = "#Life 1.06\n0 0\n1 0\n2 0\n2 1\n1 2\n";
    std::fs::write(dir.join("glider.txt"), glider).context("Failed to write glider.txt")?;

    let blinker = "#Life 1.06\n0 0\n1 0\n2 0\n";
    std::fs::write(dir.join("blinker.txt"), blinker).context("Failed to write blinker.txt")?;

    let block = "#Life 1.06\n0 0\n1 0\n0 1\n1 1\n";
    std::fs::write(dir.join("block.txt"), block).context("Failed to write block.txt")?;

    let beacon = "#Life 1.06\n0 2\n1 2\n0 3\n1 3\n2 0\n3 0\n2 1\n3 1\n";
    std::fs::write(dir.join("beacon.txt"), beacon).context("Failed to write beacon.txt")?;

    Ok(())
}
