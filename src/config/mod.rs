//! Configuration management for the sparse Game of Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, ReportingConfig, Settings,
    SimulationConfig,
};
