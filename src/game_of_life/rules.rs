//! Game of Life rules engine over sparse generations

use super::{Cell, Generation};
use itertools::iproduct;
use rayon::prelude::*;
use std::collections::HashSet;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Enumerate the Moore neighborhood of a cell
    ///
    /// Offsets whose sum would leave the representable coordinate range are
    /// omitted, so a cell at a coordinate extreme has fewer than 8 neighbors
    /// rather than neighbors wrapped to the opposite end of the range.
    pub fn neighbors(cell: Cell) -> HashSet<Cell> {
        iproduct!(-1i64..=1, -1i64..=1)
            .filter(|&offset| offset != (0, 0))
            .filter_map(|(dx, dy)| cell.offset_by(dx, dy))
            .collect()
    }

    /// Apply Game of Life rules to evolve a generation one step forward
    ///
    /// Only living cells and their neighbors can change state, so the rule is
    /// evaluated over that candidate set alone. Every neighbor count is taken
    /// against the input generation, never partially updated state, which
    /// keeps the result independent of evaluation order.
    pub fn evolve(alive: &Generation) -> Generation {
        let mut candidates: Generation = alive.clone();
        for &cell in alive {
            candidates.extend(Self::neighbors(cell));
        }

        // Candidates are evaluated in parallel against the immutable input
        candidates
            .par_iter()
            .copied()
            .filter(|&cell| {
                let count = Self::live_neighbor_count(cell, alive);
                Self::should_be_alive(alive.contains(&cell), count)
            })
            .collect()
    }

    /// Evolve a generation for multiple steps
    pub fn evolve_generations(mut alive: Generation, steps: usize) -> Generation {
        for _ in 0..steps {
            alive = Self::evolve(&alive);
        }
        alive
    }

    /// Count the living neighbors of a cell
    pub fn live_neighbor_count(cell: Cell, alive: &Generation) -> u8 {
        Self::neighbors(cell)
            .iter()
            .filter(|neighbor| alive.contains(*neighbor))
            .count() as u8
    }

    /// Check if a cell should be alive in the next generation given its
    /// current state and neighbor count
    pub fn should_be_alive(currently_alive: bool, neighbor_count: u8) -> bool {
        match (currently_alive, neighbor_count) {
            (true, 2) | (true, 3) | (false, 3) => true,
            _ => false,
        }
    }
}
