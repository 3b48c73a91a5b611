//! Grid storage for the sliding puzzle.

use crate::rules;
use serde::{Deserialize, Serialize};

/// Width (and height) of the grid in cells.
pub const COLUMN: usize = 3;

/// Total number of cells.
pub const CELLS: usize = COLUMN * COLUMN;

/// Tile index reserved for the blank cell.
pub const BLANK: u8 = 8;

/// Error constructing a grid from raw cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The supplied cells are not a permutation of 0..=8.
    #[display("cells are not a permutation of 0..=8")]
    NotAPermutation,
}

/// A completed slide: the tile at `from` moved into the blank at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideMove {
    /// Position the tile vacated.
    pub from: usize,
    /// Position the tile now occupies (previously the blank).
    pub to: usize,
}

/// 3x3 sliding-puzzle grid.
///
/// `cells[p]` holds the tile index occupying position `p`, row-major over
/// [`COLUMN`] columns; the index [`BLANK`] marks the blank cell. The cells
/// are always a permutation of 0..=8, so exactly one blank exists.
///
/// Positions and tile indices share the range 0..=8 but are distinct
/// notions: a position is a physical cell, a tile index is the identity of
/// the tile currently sitting there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 9]", into = "[u8; 9]")]
pub struct Grid {
    cells: [u8; CELLS],
}

impl Grid {
    /// The solved grid: every position holds its own tile index, blank last.
    pub fn solved() -> Self {
        Self {
            cells: [0, 1, 2, 3, 4, 5, 6, 7, 8],
        }
    }

    /// Builds a grid from raw cells, enforcing the permutation invariant.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self, GridError> {
        let mut seen = [false; CELLS];
        for &tile in &cells {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(GridError::NotAPermutation)?;
            if *slot {
                return Err(GridError::NotAPermutation);
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    /// Raw cells in row-major order.
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Tile index occupying `pos`, or `None` off the grid.
    pub fn tile_at(&self, pos: usize) -> Option<u8> {
        self.cells.get(pos).copied()
    }

    /// Whether `pos` holds the blank. Off-grid positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        self.tile_at(pos) == Some(BLANK)
    }

    /// Position of the blank cell.
    pub fn blank_position(&self) -> usize {
        self.cells
            .iter()
            .position(|&tile| tile == BLANK)
            .expect("permutation invariant guarantees one blank")
    }

    /// Where a click at `pos` would send its tile, without moving anything.
    ///
    /// Neighbors are examined top, left, bottom, right; the first empty one
    /// wins. `None` when no neighbor is empty or `pos` is off the grid.
    pub fn slide_target(&self, pos: usize) -> Option<usize> {
        if pos >= CELLS {
            return None;
        }
        rules::slide_target_by(pos, |p| self.is_empty(p))
    }

    /// Slides the tile at `pos` into an adjacent blank, if there is one.
    ///
    /// On success the tile moves to the returned `to` position and `pos`
    /// becomes the blank. Otherwise the grid is left untouched.
    pub fn slide_at(&mut self, pos: usize) -> Option<SlideMove> {
        let target = self.slide_target(pos)?;
        self.cells[target] = self.cells[pos];
        self.cells[pos] = BLANK;
        Some(SlideMove { from: pos, to: target })
    }

    /// Whether the tiles are in ascending order with the blank last.
    pub fn is_solved(&self) -> bool {
        rules::is_solved(&self.cells)
    }
}

impl TryFrom<[u8; CELLS]> for Grid {
    type Error = GridError;

    fn try_from(cells: [u8; CELLS]) -> Result<Self, GridError> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for [u8; CELLS] {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_grid_is_solved() {
        assert!(Grid::solved().is_solved());
    }

    #[test]
    fn test_from_cells_rejects_duplicates() {
        assert_eq!(
            Grid::from_cells([0, 0, 2, 3, 4, 5, 6, 7, 8]),
            Err(GridError::NotAPermutation)
        );
    }

    #[test]
    fn test_from_cells_rejects_out_of_range_tile() {
        assert_eq!(
            Grid::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(GridError::NotAPermutation)
        );
    }

    #[test]
    fn test_is_empty_off_grid_is_false() {
        let grid = Grid::solved();
        assert!(!grid.is_empty(9));
        assert!(!grid.is_empty(usize::MAX));
    }

    #[test]
    fn test_slide_at_swaps_with_adjacent_blank() {
        let mut grid = Grid::from_cells([1, 8, 2, 3, 4, 5, 6, 7, 0]).unwrap();
        let mv = grid.slide_at(0).unwrap();
        assert_eq!(mv, SlideMove { from: 0, to: 1 });
        assert_eq!(grid.cells(), &[8, 1, 2, 3, 4, 5, 6, 7, 0]);
    }

    #[test]
    fn test_slide_at_without_empty_neighbor_is_noop() {
        let mut grid = Grid::solved();
        let before = grid.clone();
        assert_eq!(grid.slide_at(0), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_slide_at_off_grid_is_noop() {
        let mut grid = Grid::solved();
        assert_eq!(grid.slide_at(9), None);
        assert!(grid.is_solved());
    }
}
