//! Puzzle rules for the sliding grid.
//!
//! Pure functions over positions and predicates, separated from grid
//! storage so each rule can be exercised directly in tests.

pub mod neighbors;
pub mod win;

pub use neighbors::{neighbor, slide_target_by, Direction};
pub use win::is_solved;
