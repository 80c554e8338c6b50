//! Recorded history of a simulation run

use crate::analysis::PatternAnalysis;
use crate::life::{GenerationEngine, Grid};
use serde::{Deserialize, Serialize};

/// Population and change counts for one advance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: u64,
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Everything recorded over a run: grid snapshots per generation,
/// per-advance statistics, and the final classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    pub history: Vec<GenerationRecord>,
    pub evolution: Vec<Grid>,
    pub analysis: PatternAnalysis,
}

impl RunReport {
    /// Start a report from the engine's current state
    pub fn begin(engine: &GenerationEngine) -> Self {
        Self {
            width: engine.width(),
            height: engine.height(),
            generations: 0,
            history: Vec::new(),
            evolution: vec![engine.snapshot()],
            analysis: PatternAnalysis::default(),
        }
    }

    /// Record the advance the engine just performed
    pub fn record(&mut self, engine: &GenerationEngine) {
        let delta = engine.last_delta();
        self.history.push(GenerationRecord {
            generation: engine.generation(),
            population: engine.population(),
            births: delta.births.len(),
            deaths: delta.deaths.len(),
        });
        self.evolution.push(engine.snapshot());
        self.generations = self.history.len();
    }

    /// Classify the recorded evolution
    pub fn finish(&mut self) {
        self.analysis = PatternAnalysis::analyze(&self.evolution);
    }

    /// Advance `generations` times and return the completed report
    pub fn run(engine: &mut GenerationEngine, generations: usize) -> Self {
        let mut report = Self::begin(engine);
        for _ in 0..generations {
            engine.advance();
            report.record(engine);
        }
        report.finish();
        report
    }

    /// Grid contents before the first recorded advance
    pub fn initial(&self) -> &Grid {
        &self.evolution[0]
    }

    /// Grid contents after the last recorded advance
    pub fn final_grid(&self) -> &Grid {
        self.evolution.last().expect("evolution is never empty")
    }

    /// Drop the per-generation snapshots, keeping only the first and last.
    /// Used when the host does not want full state saved.
    pub fn trim_snapshots(&mut self) {
        if self.evolution.len() > 2 {
            if let Some(last) = self.evolution.pop() {
                self.evolution.truncate(1);
                self.evolution.push(last);
            }
        }
    }
}
