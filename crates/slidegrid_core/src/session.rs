//! Game session: an owned grid plus an explicit finished flag.

use crate::grid::{Grid, SlideMove};
use crate::shuffle::Shuffle;
use rand::RngCore;
use tracing::{debug, info, instrument};

/// A single puzzle session.
///
/// Owns the grid exclusively; input handling and rendering borrow it.
/// Once the puzzle is solved the session freezes and further clicks are
/// ignored until [`restart`](GameSession::restart).
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    finished: bool,
}

impl GameSession {
    /// Starts a session on a freshly shuffled grid.
    #[instrument(skip(strategy, rng))]
    pub fn new(strategy: &dyn Shuffle, rng: &mut dyn RngCore) -> Self {
        let grid = strategy.shuffle(rng);
        // A short walk can land back on the solved grid; such a session
        // starts frozen with nothing left to do.
        let finished = grid.is_solved();
        info!(cells = ?grid.cells(), finished, "session started");
        Self { grid, finished }
    }

    /// Applies a click at `pos`.
    ///
    /// Returns the from/to pair when a tile slid into the blank; `None`
    /// when the session is frozen, `pos` has no empty neighbor, or `pos`
    /// is off the grid.
    #[instrument(skip(self))]
    pub fn apply_click(&mut self, pos: usize) -> Option<SlideMove> {
        if self.finished {
            debug!(pos, "click ignored, puzzle already solved");
            return None;
        }
        let mv = match self.grid.slide_at(pos) {
            Some(mv) => mv,
            None => {
                debug!(pos, "click had no effect");
                return None;
            }
        };
        if self.grid.is_solved() {
            self.finished = true;
            info!(from = mv.from, to = mv.to, "puzzle solved");
        } else {
            debug!(from = mv.from, to = mv.to, "tile moved");
        }
        Some(mv)
    }

    /// Replaces the grid with a fresh shuffle and unfreezes input.
    #[instrument(skip(self, strategy, rng))]
    pub fn restart(&mut self, strategy: &dyn Shuffle, rng: &mut dyn RngCore) {
        *self = Self::new(strategy, rng);
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tile index occupying `pos`, or `None` off the grid.
    pub fn tile_at(&self, pos: usize) -> Option<u8> {
        self.grid.tile_at(pos)
    }

    /// Whether the tiles are currently in ascending order.
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Whether input is frozen because the puzzle was solved.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::CuratedShuffle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Test strategy returning a fixed board.
    struct Fixed(Grid);

    impl Shuffle for Fixed {
        fn shuffle(&self, _rng: &mut dyn RngCore) -> Grid {
            self.0.clone()
        }
    }

    #[test]
    fn test_new_session_is_not_finished_on_curated_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let session = GameSession::new(&CuratedShuffle, &mut rng);
        assert!(!session.is_finished());
        assert!(!session.is_solved());
    }

    #[test]
    fn test_click_one_move_from_solved_finishes_the_session() {
        let start = Grid::from_cells([0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = GameSession::new(&Fixed(start), &mut rng);

        // Tile 7 sits at position 8; clicking it slides it left into the blank.
        let mv = session.apply_click(8).unwrap();
        assert_eq!(mv, SlideMove { from: 8, to: 7 });
        assert!(session.is_solved());
        assert!(session.is_finished());

        // Input is frozen afterwards.
        assert_eq!(session.apply_click(5), None);
    }

    #[test]
    fn test_click_without_empty_neighbor_returns_none() {
        let start = Grid::from_cells([1, 0, 2, 3, 4, 5, 6, 8, 7]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = GameSession::new(&Fixed(start.clone()), &mut rng);

        // Position 0's neighbors hold tiles 0 and 3; neither is blank.
        assert_eq!(session.apply_click(0), None);
        assert_eq!(session.grid(), &start);
    }
}
