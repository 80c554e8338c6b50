//! Bounded-Grid Game of Life Engine
//!
//! This library provides a double-buffered Conway's Game of Life engine on
//! a finite, non-wrapping grid, together with the pacing and session state
//! a host loop needs to drive it.

pub mod analysis;
pub mod config;
pub mod life;
pub mod runner;
pub mod utils;

pub use config::Settings;
pub use life::{GenerationEngine, Grid};
pub use runner::{RunReport, Simulation};

use anyhow::Result;

/// Main entry point: run a configured simulation for a fixed number of
/// generations and return the recorded report
pub fn run_simulation(settings: &Settings, generations: usize) -> Result<RunReport> {
    let mut simulation = Simulation::new(settings)?;
    Ok(RunReport::run(simulation.engine_mut(), generations))
}
