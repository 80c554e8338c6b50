//! Next-state rule for the bounded universe

use serde::{Deserialize, Serialize};

/// Outcome of the rule table for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFate {
    /// Alive with fewer than two neighbors
    Underpopulation,
    /// Alive with two or three neighbors
    Survives,
    /// Alive with more than three neighbors
    Overpopulation,
    /// Dead with exactly three neighbors
    Birth,
    /// Dead with any other neighbor count
    StaysDead,
}

impl CellFate {
    /// Whether the cell is alive in the next generation
    pub fn is_alive(self) -> bool {
        matches!(self, CellFate::Survives | CellFate::Birth)
    }
}

/// Conway rule table (B3/S23)
pub struct LifeRules;

impl LifeRules {
    /// Classify a cell from its current state and live neighbor count
    pub fn fate(alive: bool, neighbors: u8) -> CellFate {
        match (alive, neighbors) {
            (true, n) if n < 2 => CellFate::Underpopulation,
            (true, 2) | (true, 3) => CellFate::Survives,
            (true, _) => CellFate::Overpopulation,
            (false, 3) => CellFate::Birth,
            (false, _) => CellFate::StaysDead,
        }
    }

    /// Boolean projection of the rule table
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        Self::fate(alive, neighbors).is_alive()
    }

    /// Neighbor counts that produce a birth (dead -> alive)
    pub fn birth_neighbor_counts() -> Vec<u8> {
        vec![3]
    }

    /// Neighbor counts that let a living cell survive
    pub fn survival_neighbor_counts() -> Vec<u8> {
        vec![2, 3]
    }

    /// Largest possible neighbor count in a Moore neighborhood
    pub fn max_neighbor_count() -> u8 {
        8
    }
}
