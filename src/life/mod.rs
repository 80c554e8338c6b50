//! Bounded Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::{GenerationDelta, GenerationEngine};
pub use grid::{EngineError, Grid};
pub use io::{create_example_patterns, load_pattern_from_file, save_pattern_to_file};
pub use rules::{CellFate, LifeRules};
