//! Game of Life core functionality

pub mod cell;
pub mod io;
pub mod rules;

pub use cell::{Cell, Generation};
pub use io::{create_example_patterns, load_cells_from_file, save_cells_to_file};
pub use rules::GameOfLifeRules;
