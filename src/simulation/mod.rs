//! Simulation orchestration

pub mod runner;

pub use runner::{Simulation, SimulationError};
