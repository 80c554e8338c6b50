//! Grid storage for the bounded Game of Life universe

use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Construction-time errors for the engine.
///
/// Once a grid exists, every per-cell operation on it is total:
/// out-of-bounds reads are dead, out-of-bounds writes are ignored.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },
}

/// One generation of the bounded universe.
///
/// Cells are stored row-major; `(x, y)` addresses column `x` of row `y`.
/// The grid does not wrap: every coordinate outside
/// `[0, width) x [0, height)` behaves as a permanently dead neighbor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Create a grid from explicit rows (pattern files, tests)
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimension { width, height }.into());
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!(
                    "row {} has length {}, expected {} (all rows must have the same length)",
                    y,
                    row.len(),
                    width
                );
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Convert 2D coordinates to the row-major index
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether the cell at `(x, y)` is alive. Out-of-bounds reads are dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[self.index(x, y)]
        } else {
            false
        }
    }

    /// Set the cell at `(x, y)`. Out-of-bounds writes are silently ignored
    /// so that an unclamped pointer position can never interrupt a host loop.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = alive;
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Count living Moore neighbors of `(x, y)` in this generation.
    ///
    /// The eight orthogonal and diagonal positions are examined; neighbors
    /// falling outside the grid count as dead. The universe is finite, not
    /// a torus.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        [-1isize, 0, 1]
            .into_iter()
            .cartesian_product([-1isize, 0, 1])
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dx, dy)| self.neighbor_alive(x as isize + dx, y as isize + dy))
            .count() as u8
    }

    /// Signed-coordinate probe used by neighbor counting. Anything outside
    /// the grid, including negative coordinates, is dead.
    fn neighbor_alive(&self, x: isize, y: isize) -> bool {
        if x >= 0 && x < self.width as isize && y >= 0 && y < self.height as isize {
            self.cells[self.index(x as usize, y as usize)]
        } else {
            false
        }
    }

    /// Coordinates of all living cells
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_alive(x, y) {
                    living.push((x, y));
                }
            }
        }
        living
    }

    /// Total number of living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Whether no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.is_alive(x, y) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.cells.len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(EngineError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(EngineError::InvalidDimension { width: 5, height: 0 })
        );
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.living_count(), 3);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(1, 1));
        assert!(!grid.is_alive(1, 0));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let ragged = vec![vec![true, false], vec![true]];
        assert!(Grid::from_rows(ragged).is_err());
        assert!(Grid::from_rows(Vec::new()).is_err());
        assert!(Grid::from_rows(vec![Vec::new()]).is_err());
    }

    #[test]
    fn test_out_of_bounds_reads_are_dead() {
        let mut grid = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }
        assert!(!grid.is_alive(3, 0));
        assert!(!grid.is_alive(0, 3));
        assert!(!grid.is_alive(100, 100));
    }

    #[test]
    fn test_out_of_bounds_set_is_noop() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(3, 1, true);
        grid.set(1, 3, true);
        grid.set(42, 42, true);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_neighbor_counting() {
        let rows = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_rows(rows).unwrap();

        // Center cell is surrounded on all eight sides
        assert_eq!(grid.count_live_neighbors(1, 1), 8);

        // Corner cell only sees its three in-bounds neighbors, one of
        // which (the center) is dead
        assert_eq!(grid.count_live_neighbors(0, 0), 2);
    }

    #[test]
    fn test_neighbor_counting_does_not_wrap() {
        let rows = vec![
            vec![true, false],
            vec![false, true],
        ];
        let grid = Grid::from_rows(rows).unwrap();

        // On a torus the corner would see the opposite corner several
        // times over; here only the single diagonal neighbor counts.
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, true);
        grid.set(1, 1, true);
        grid.clear();
        assert!(grid.is_empty());
    }
}
