//! Sliding-tile puzzle core - the 3x3 eight-puzzle state machine.
//!
//! Eight numbered tiles and one blank cell sit on a 3x3 grid; a tile
//! adjacent to the blank may slide into it, and the puzzle is solved when
//! the tiles are in ascending order with the blank last.
//!
//! # Architecture
//!
//! - **Grid**: the tile permutation plus move legality and win checks
//! - **Rules**: pure adjacency and win functions, separated from storage
//! - **Shuffle**: interchangeable strategies producing solvable boards
//! - **Session**: an owned grid with an explicit finished flag
//! - **Render**: the port a frontend implements to be repainted through
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use slidegrid_core::{CuratedShuffle, Direction, GameSession};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = GameSession::new(&CuratedShuffle, &mut rng);
//! let blank = session.grid().blank_position();
//!
//! // Clicking the cell above the blank slides its tile down into the gap.
//! let above = slidegrid_core::neighbor(blank, Direction::Up).expect("no curated blank is in the top row");
//! let mv = session.apply_click(above).expect("tile slides into the blank");
//! assert_eq!(mv.to, blank);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod grid;
pub mod render;
pub mod rules;
mod session;
mod shuffle;

// Crate-level exports - grid storage
pub use grid::{Grid, GridError, SlideMove, BLANK, CELLS, COLUMN};

// Crate-level exports - rules
pub use rules::{neighbor, slide_target_by, Direction};

// Crate-level exports - rendering port
pub use render::RenderPort;

// Crate-level exports - session
pub use session::GameSession;

// Crate-level exports - shuffle strategies
pub use shuffle::{
    CuratedShuffle, FullShuffle, RandomWalkShuffle, Shuffle, CURATED, DEFAULT_WALK_STEPS,
};
