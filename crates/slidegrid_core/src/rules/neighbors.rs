//! Adjacency rules and the slide-target priority.

use crate::grid::{CELLS, COLUMN};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the four slide directions, relative to a grid position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Direction {
    /// Toward the row above.
    Up,
    /// Toward the previous column.
    Left,
    /// Toward the row below.
    Down,
    /// Toward the next column.
    Right,
}

impl Direction {
    /// Neighbor examination order for [`slide_target_by`]: top beats left
    /// beats bottom beats right. Clicks must resolve the same way on every
    /// run, so this order is part of the contract.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
}

/// Neighboring position of `pos` in `direction`, or `None` at a grid edge.
///
/// All four directions bounds-check uniformly, so an off-grid `pos` has no
/// neighbors in any direction.
pub fn neighbor(pos: usize, direction: Direction) -> Option<usize> {
    if pos >= CELLS {
        return None;
    }
    match direction {
        Direction::Up => pos.checked_sub(COLUMN),
        Direction::Left => (pos % COLUMN != 0).then(|| pos - 1),
        Direction::Down => {
            let down = pos + COLUMN;
            (down < CELLS).then_some(down)
        }
        Direction::Right => (pos % COLUMN != COLUMN - 1).then(|| pos + 1),
    }
}

/// First neighbor of `pos`, in [`Direction::PRIORITY`] order, for which
/// `is_empty` holds.
///
/// Generic over the emptiness predicate: a well-formed grid has a single
/// blank, but the tie-break between several empty neighbors is still part
/// of the contract and must be testable.
pub fn slide_target_by(pos: usize, is_empty: impl Fn(usize) -> bool) -> Option<usize> {
    Direction::PRIORITY
        .iter()
        .find_map(|&direction| neighbor(pos, direction).filter(|&n| is_empty(n)))
}
