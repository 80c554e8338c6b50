//! Interactive simulation session: engine, pacing, and edit gestures

use super::Ticker;
use crate::config::Settings;
use crate::life::{load_pattern_from_file, GenerationDelta, GenerationEngine};
use anyhow::{Context, Result};

/// A paced Game of Life session.
///
/// Owns the generation engine, the tick accumulator, and the running flag,
/// and translates host-loop events (elapsed time, pointer gestures, clear
/// requests) into engine operations. Rendering and input decoding stay
/// with the host.
#[derive(Debug)]
pub struct Simulation {
    engine: GenerationEngine,
    ticker: Ticker,
    running: bool,
}

impl Simulation {
    /// Build a session from settings. The seed pattern, when configured,
    /// is stamped centered on the grid; cells falling outside are clipped.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut engine = GenerationEngine::new(settings.grid.width, settings.grid.height)
            .context("Failed to create generation engine")?;

        if let Some(ref pattern_file) = settings.input.pattern_file {
            let pattern = load_pattern_from_file(pattern_file).with_context(|| {
                format!("Failed to load seed pattern from {}", pattern_file.display())
            })?;
            let origin_x = engine.width().saturating_sub(pattern.width) / 2;
            let origin_y = engine.height().saturating_sub(pattern.height) / 2;
            engine.stamp(&pattern, origin_x, origin_y);
        }

        Ok(Self {
            engine,
            ticker: Ticker::new(settings.timing.tick_interval_ms),
            running: false,
        })
    }

    /// Feed elapsed wall-clock time to the session. Advances one
    /// generation when the session is running and the ticker fires,
    /// returning the change signal for that advance.
    pub fn step(&mut self, elapsed_ms: f64) -> Option<&GenerationDelta> {
        if self.running && self.ticker.tick(elapsed_ms) {
            Some(self.engine.advance())
        } else {
            None
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Press-and-hold gesture: force a cell alive.
    /// Out-of-bounds positions are ignored.
    pub fn paint(&mut self, x: usize, y: usize) {
        self.engine.set_cell(x, y, true);
    }

    /// Release gesture: force a cell dead.
    /// Out-of-bounds positions are ignored.
    pub fn erase(&mut self, x: usize, y: usize) {
        self.engine.set_cell(x, y, false);
    }

    /// Kill every cell and advance once so derived state (deltas, any
    /// renderer caches keyed off them) reflects the empty grid.
    pub fn clear(&mut self) {
        self.engine.clear_all();
        self.engine.advance();
    }

    pub fn engine(&self) -> &GenerationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GenerationEngine {
        &mut self.engine
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut Ticker {
        &mut self.ticker
    }
}
