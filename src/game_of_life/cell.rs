//! Cell and generation types for the sparse, unbounded board

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single position on the infinite integer plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    x: i64,
    y: i64,
}

/// The set of all living cells at one simulation tick
///
/// The board is unbounded, so occupancy is modeled as a sparse set of
/// coordinates rather than any array or grid.
pub type Generation = HashSet<Cell>;

impl Cell {
    /// Create a cell from its coordinates
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// Translate by `(dx, dy)`, returning `None` if either sum would leave
    /// the representable coordinate range
    pub fn offset_by(&self, dx: i64, dy: i64) -> Option<Cell> {
        Some(Cell {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
