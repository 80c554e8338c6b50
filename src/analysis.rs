//! Classification of recorded evolutions

use crate::life::Grid;
use serde::{Deserialize, Serialize};

/// What a recorded evolution settled into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Whether the pattern repeats every generation
    pub is_still_life: bool,
    /// Whether the pattern repeats with a period greater than one
    pub is_oscillator: bool,
    /// Period of oscillation (if oscillator)
    pub period: Option<usize>,
    /// Whether the population reached zero
    pub died_out: bool,
    /// Whether the living cells drift across the grid
    pub is_moving: bool,
}

impl PatternAnalysis {
    /// Analyze a sequence of generations captured from a run
    pub fn analyze(evolution: &[Grid]) -> Self {
        if evolution.len() < 2 {
            return Self::default();
        }

        let died_out = evolution
            .last()
            .map(|grid| grid.is_empty())
            .unwrap_or(false);
        let is_still_life = !died_out && Self::check_still_life(evolution);
        let (is_oscillator, period) = if is_still_life {
            (false, None)
        } else {
            Self::check_oscillator(evolution)
        };
        let is_moving = Self::check_moving(evolution);

        Self {
            is_still_life,
            is_oscillator,
            period,
            died_out,
            is_moving,
        }
    }

    /// Short human-readable label for the classification
    pub fn classification(&self) -> &'static str {
        if self.died_out {
            "Died Out"
        } else if self.is_still_life {
            "Still Life"
        } else if self.is_oscillator {
            "Oscillator"
        } else if self.is_moving {
            "Moving Pattern"
        } else {
            "Other"
        }
    }

    /// Check if the pattern is a still life
    fn check_still_life(evolution: &[Grid]) -> bool {
        evolution[0] == evolution[1]
    }

    /// Check if the pattern is an oscillator and find its period
    fn check_oscillator(evolution: &[Grid]) -> (bool, Option<usize>) {
        if evolution.len() < 3 {
            return (false, None);
        }

        // Check for periods 2-8
        for period in 2..=8.min(evolution.len() - 1) {
            if evolution[0] == evolution[period] {
                // Verify the period holds across the rest of the recording
                let mut is_periodic = true;
                for i in 1..evolution.len() - period {
                    if evolution[i] != evolution[i + period] {
                        is_periodic = false;
                        break;
                    }
                }
                if is_periodic {
                    return (true, Some(period));
                }
            }
        }

        (false, None)
    }

    /// Check if the living cells drift across the grid
    fn check_moving(evolution: &[Grid]) -> bool {
        // Heuristic: same population but a shifted center of mass. A
        // glider's center drifts roughly a third of a cell per step.
        for i in 1..evolution.len() {
            let prev_cells = evolution[i - 1].living_cells();
            let curr_cells = evolution[i].living_cells();

            if prev_cells.len() == curr_cells.len() && !prev_cells.is_empty() {
                let prev_center = Self::center_of_mass(&prev_cells);
                let curr_center = Self::center_of_mass(&curr_cells);

                let distance = ((prev_center.0 - curr_center.0).powi(2)
                    + (prev_center.1 - curr_center.1).powi(2))
                .sqrt();

                if distance > 0.3 {
                    return true;
                }
            }
        }

        false
    }

    fn center_of_mass(cells: &[(usize, usize)]) -> (f64, f64) {
        if cells.is_empty() {
            return (0.0, 0.0);
        }

        let sum_x: usize = cells.iter().map(|(x, _)| x).sum();
        let sum_y: usize = cells.iter().map(|(_, y)| y).sum();

        (
            sum_x as f64 / cells.len() as f64,
            sum_y as f64 / cells.len() as f64,
        )
    }
}

impl Default for PatternAnalysis {
    fn default() -> Self {
        Self {
            is_still_life: false,
            is_oscillator: false,
            period: None,
            died_out: false,
            is_moving: false,
        }
    }
}
