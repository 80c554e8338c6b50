//! Tick-interval accumulator for pacing generation advances

/// Decides when a generation is due based on accumulated elapsed time.
///
/// The ticker owns the timing state a host loop needs: the configured
/// interval between generations and the time accumulated since the last
/// one fired. An interval of zero fires on every call.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: f64,
    accumulated_ms: f64,
}

impl Ticker {
    /// Create a ticker. Negative intervals clamp to zero.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            accumulated_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Replace the interval. Negative values clamp to zero.
    pub fn set_interval(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms.max(0.0);
    }

    /// Shift the interval by `delta_ms`, clamping at zero
    pub fn adjust(&mut self, delta_ms: f64) {
        self.set_interval(self.interval_ms + delta_ms);
    }

    /// Accumulate elapsed time and report whether a generation is due.
    /// The accumulator resets when the ticker fires.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        self.accumulated_ms += elapsed_ms;
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms = 0.0;
            true
        } else {
            false
        }
    }

    /// Discard accumulated time without firing
    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}
