//! Orchestration of multi-generation simulation runs

use crate::config::ReportingConfig;
use crate::game_of_life::{GameOfLifeRules, Generation};
use crate::utils::{ColorOutput, Reporter};
use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Rejected inputs and failed preconditions of the simulation layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("number of generations must be greater than zero")]
    InvalidGenerationCount,
    #[error("cannot render a grid for an empty generation")]
    EmptyGeneration,
}

/// Drives the rules engine across generations, reporting between steps
pub struct Simulation<W: Write> {
    reporting: ReportingConfig,
    reporter: Reporter<W>,
}

impl Simulation<io::Stdout> {
    /// Simulation reporting to standard output
    pub fn with_stdout(reporting: ReportingConfig) -> Self {
        Self::new(reporting, io::stdout())
    }
}

impl<W: Write> Simulation<W> {
    pub fn new(reporting: ReportingConfig, sink: W) -> Self {
        Self {
            reporting,
            reporter: Reporter::new(sink),
        }
    }

    /// Run the simulation for the requested number of generations
    ///
    /// The input counts as the first generation, so `generations` means
    /// `generations - 1` transitions and `run(1, ..)` returns the input
    /// unchanged. Inputs are validated once before any stepping.
    ///
    /// A failure inside a single step or its reporting is logged and ends
    /// the run early, returning the most recent complete generation rather
    /// than propagating the failure to the caller.
    pub fn run(
        &mut self,
        generations: usize,
        initial: Generation,
    ) -> Result<Generation, SimulationError> {
        if generations == 0 {
            return Err(SimulationError::InvalidGenerationCount);
        }

        let mut current = initial;
        for _ in 1..generations {
            let started = Instant::now();
            let stepped =
                panic::catch_unwind(AssertUnwindSafe(|| GameOfLifeRules::evolve(&current)));
            let next = match stepped {
                Ok(next) => next,
                Err(payload) => {
                    log_run_failure(&panic_message(&payload));
                    break;
                }
            };
            let elapsed = started.elapsed();
            current = next;

            if let Err(err) = self.report(&current, elapsed) {
                log_run_failure(&format!("{:#}", err));
                break;
            }
        }

        Ok(current)
    }

    fn report(&mut self, generation: &Generation, elapsed: Duration) -> anyhow::Result<()> {
        if self.reporting.print_cells {
            self.reporter.print_cells(generation)?;
        }
        if self.reporting.print_grid {
            self.reporter.print_grid(generation)?;
        }
        if self.reporting.print_runtime {
            self.reporter.print_runtime(elapsed)?;
        }
        Ok(())
    }

    /// Consume the simulation, returning the reporter sink
    pub fn into_sink(self) -> W {
        self.reporter.into_inner()
    }
}

fn log_run_failure(message: &str) {
    eprintln!(
        "{}",
        ColorOutput::error(&format!(
            "An unexpected error occurred while running the Game of Life: {}",
            message
        ))
    );
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
