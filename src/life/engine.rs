//! Double-buffered generation engine

use super::{EngineError, Grid, LifeRules};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::mem;

/// Per-cell change signal from the most recent advance.
///
/// Coordinates are listed in row-major order. A renderer can redraw just
/// these cells instead of sweeping the whole grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationDelta {
    /// Cells that were dead and are now alive
    pub births: Vec<(usize, usize)>,
    /// Cells that were alive and are now dead
    pub deaths: Vec<(usize, usize)>,
}

impl GenerationDelta {
    /// All cells whose state changed in the last advance
    pub fn changed(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.births.iter().chain(self.deaths.iter()).copied()
    }

    /// Whether the advance left the grid unchanged
    pub fn is_static(&self) -> bool {
        self.births.is_empty() && self.deaths.is_empty()
    }
}

/// The generation engine: two grid buffers and the advance algorithm.
///
/// `current` is the authoritative generation and the only buffer external
/// callers ever observe; `next` is the write target during [`advance`]
/// and holds stale data between calls. Both buffers are allocated once at
/// construction and reused for the lifetime of the engine.
///
/// [`advance`]: GenerationEngine::advance
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    current: Grid,
    next: Grid,
    generation: u64,
    delta: GenerationDelta,
}

impl GenerationEngine {
    /// Create an engine with both buffers all dead
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Ok(Self {
            current: Grid::new(width, height)?,
            next: Grid::new(width, height)?,
            generation: 0,
            delta: GenerationDelta::default(),
        })
    }

    pub fn width(&self) -> usize {
        self.current.width
    }

    pub fn height(&self) -> usize {
        self.current.height
    }

    /// Number of advances since construction or the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the cell is alive in the current generation.
    /// Out-of-bounds coordinates read as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current.is_alive(x, y)
    }

    /// Number of living cells in the current generation
    pub fn population(&self) -> usize {
        self.current.living_count()
    }

    /// Edit interface: force a cell alive or dead in the current
    /// generation. The edit is visible to immediate reads and to the next
    /// advance. Out-of-bounds coordinates are silently ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.current.set(x, y, alive);
    }

    /// Copy a pattern into the current generation with its top-left corner
    /// at `(origin_x, origin_y)`. Cells falling outside the grid are
    /// clipped, matching the edit interface semantics.
    pub fn stamp(&mut self, pattern: &Grid, origin_x: usize, origin_y: usize) {
        for (x, y) in pattern.living_cells() {
            self.current.set(origin_x + x, origin_y + y, true);
        }
    }

    /// Compute the next generation and make it current.
    ///
    /// Every cell is evaluated against the rule table using neighbor
    /// counts from `current`; results land in `next`. Rows are computed in
    /// parallel, which is sound because reads only touch `current` and each
    /// row chunk of `next` is written by exactly one worker. The parallel
    /// sweep completes before the buffers are swapped, so no partially
    /// advanced generation is ever observable from outside.
    pub fn advance(&mut self) -> &GenerationDelta {
        let current = &self.current;
        let width = current.width;

        self.next
            .cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let neighbors = current.count_live_neighbors(x, y);
                    *cell = LifeRules::next_state(current.is_alive(x, y), neighbors);
                }
            });

        self.delta = Self::diff(&self.current, &self.next);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        &self.delta
    }

    /// Advance repeatedly, returning the number of generations computed
    pub fn advance_many(&mut self, generations: usize) -> usize {
        for _ in 0..generations {
            self.advance();
        }
        generations
    }

    fn diff(old: &Grid, new: &Grid) -> GenerationDelta {
        let mut delta = GenerationDelta::default();
        for y in 0..old.height {
            for x in 0..old.width {
                match (old.is_alive(x, y), new.is_alive(x, y)) {
                    (false, true) => delta.births.push((x, y)),
                    (true, false) => delta.deaths.push((x, y)),
                    _ => {}
                }
            }
        }
        delta
    }

    /// Change signal from the most recent advance
    pub fn last_delta(&self) -> &GenerationDelta {
        &self.delta
    }

    /// Kill every cell in both buffers and restart the generation count.
    /// Callers that track derived state typically follow with one
    /// [`advance`](GenerationEngine::advance) to refresh it.
    pub fn clear_all(&mut self) {
        self.current.clear();
        self.next.clear();
        self.generation = 0;
        self.delta = GenerationDelta::default();
    }

    /// Copy of the current generation
    pub fn snapshot(&self) -> Grid {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_cells(width: usize, height: usize, cells: &[(usize, usize)]) -> GenerationEngine {
        let mut engine = GenerationEngine::new(width, height).unwrap();
        for &(x, y) in cells {
            engine.set_cell(x, y, true);
        }
        engine
    }

    #[test]
    fn test_invalid_dimensions_propagate() {
        assert!(matches!(
            GenerationEngine::new(0, 10),
            Err(EngineError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut engine = GenerationEngine::new(8, 8).unwrap();
        let delta = engine.advance();
        assert!(delta.is_static());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_advance_is_deterministic() {
        let cells = [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)];
        let mut a = engine_with_cells(6, 6, &cells);
        let mut b = engine_with_cells(6, 6, &cells);
        for _ in 0..10 {
            a.advance();
            b.advance();
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let mut engine = engine_with_cells(5, 5, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let before = engine.snapshot();
        for _ in 0..5 {
            let delta = engine.advance();
            assert!(delta.is_static());
        }
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_blinker_oscillates() {
        // Three-cell line at x = 1, y = 0..3 on a 5x5 grid
        let mut engine = engine_with_cells(5, 5, &[(1, 0), (1, 1), (1, 2)]);
        let original = engine.snapshot();

        engine.advance();
        assert_eq!(
            engine.snapshot().living_cells(),
            vec![(0, 1), (1, 1), (2, 1)]
        );

        engine.advance();
        assert_eq!(engine.snapshot(), original);
    }

    #[test]
    fn test_edge_blinker_dies_without_wrapping() {
        // A blinker along the top edge loses its off-grid neighborhood.
        // On a torus it would keep oscillating through the opposite edge;
        // here it collapses to two cells and then starves.
        let mut engine = engine_with_cells(5, 5, &[(0, 0), (1, 0), (2, 0)]);

        engine.advance();
        assert_eq!(engine.snapshot().living_cells(), vec![(1, 0), (1, 1)]);

        engine.advance();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_glider_truncates_into_corner_block() {
        // A glider aimed at the bottom-right corner cannot leave the grid.
        // After seven generations the wreckage settles into a 2x2 block
        // against the corner; a wrapping universe would still hold a
        // five-cell glider.
        let mut engine = engine_with_cells(5, 5, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
        engine.advance_many(7);

        assert_eq!(
            engine.snapshot().living_cells(),
            vec![(3, 3), (4, 3), (3, 4), (4, 4)]
        );

        let delta = engine.advance();
        assert!(delta.is_static());
    }

    #[test]
    fn test_delta_reports_births_and_deaths() {
        let mut engine = engine_with_cells(5, 5, &[(1, 0), (1, 1), (1, 2)]);
        let delta = engine.advance();

        assert_eq!(delta.births, vec![(0, 1), (2, 1)]);
        assert_eq!(delta.deaths, vec![(1, 0), (1, 2)]);
        assert_eq!(delta.changed().count(), 4);
    }

    #[test]
    fn test_edit_visible_immediately_and_to_advance() {
        let mut engine = GenerationEngine::new(5, 5).unwrap();
        engine.set_cell(1, 1, true);
        engine.set_cell(2, 1, true);
        engine.set_cell(3, 1, true);
        assert!(engine.is_alive(2, 1));

        // The edits seed a blinker, so the advance must see them
        engine.advance();
        assert_eq!(
            engine.snapshot().living_cells(),
            vec![(2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_out_of_bounds_edit_is_ignored() {
        let mut engine = GenerationEngine::new(3, 3).unwrap();
        engine.set_cell(3, 0, true);
        engine.set_cell(0, 3, true);
        engine.set_cell(99, 99, true);
        assert_eq!(engine.population(), 0);
        assert!(!engine.is_alive(99, 99));
    }

    #[test]
    fn test_clear_all_then_advance_is_all_dead() {
        let mut engine = engine_with_cells(6, 6, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        engine.advance_many(3);

        engine.clear_all();
        assert_eq!(engine.generation(), 0);

        let delta = engine.advance();
        assert!(delta.is_static());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_stamp_clips_at_boundary() {
        let pattern = Grid::from_rows(vec![
            vec![true, true],
            vec![true, true],
        ])
        .unwrap();

        let mut engine = GenerationEngine::new(4, 4).unwrap();
        engine.stamp(&pattern, 3, 3);

        // Only the corner cell lands in bounds
        assert_eq!(engine.snapshot().living_cells(), vec![(3, 3)]);
    }

    #[test]
    fn test_generation_counter() {
        let mut engine = GenerationEngine::new(4, 4).unwrap();
        assert_eq!(engine.generation(), 0);
        engine.advance_many(4);
        assert_eq!(engine.generation(), 4);
    }
}
