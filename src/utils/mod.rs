//! Display and console helpers

pub mod display;

pub use display::{ColorOutput, GenerationFormatter, Reporter};
