//! Application state and input handling.

use rand::rngs::StdRng;
use rand::SeedableRng;
use slidegrid_core::{render, GameSession, Shuffle};
use tracing::debug;

use crate::ui::board::BoardBuffer;

const START_HINT: &str = "Press 1-9 or click a tile to slide it into the gap.";

/// Main application state: the session plus the painted board.
pub struct App {
    session: GameSession,
    board: BoardBuffer,
    strategy: Box<dyn Shuffle>,
    rng: StdRng,
    status: String,
}

impl App {
    /// Creates the application with a freshly shuffled board.
    pub fn new(strategy: Box<dyn Shuffle>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = GameSession::new(strategy.as_ref(), &mut rng);
        let mut board = BoardBuffer::default();
        render::draw_all(session.grid(), &mut board);
        Self {
            session,
            board,
            strategy,
            rng,
            status: START_HINT.to_string(),
        }
    }

    /// The painted board the widgets read from.
    pub fn board(&self) -> &BoardBuffer {
        &self.board
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the puzzle is solved and input frozen.
    pub fn finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Applies a click at `pos` and repaints the touched cells.
    pub fn select(&mut self, pos: usize) {
        debug!(pos, "cell selected");
        match self.session.apply_click(pos) {
            Some(mv) => {
                render::refresh(self.session.grid(), mv, &mut self.board);
                if self.session.is_finished() {
                    render::reveal_blank(&mut self.board);
                    self.status =
                        "Solved! Press 'r' for a new board or 'q' to quit.".to_string();
                } else if let Some(tile) = self.session.tile_at(mv.to) {
                    self.status = format!("Moved tile {} into the gap.", tile + 1);
                }
            }
            None if self.session.is_finished() => {
                self.status = "Already solved - press 'r' for a new board.".to_string();
            }
            None => {
                self.status = "That tile has no empty cell beside it.".to_string();
            }
        }
    }

    /// Starts over on a fresh shuffle.
    pub fn restart(&mut self) {
        debug!("restarting");
        self.session.restart(self.strategy.as_ref(), &mut self.rng);
        render::draw_all(self.session.grid(), &mut self.board);
        self.status = START_HINT.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidegrid_core::{CuratedShuffle, BLANK, CELLS};

    fn fixed_app() -> App {
        App::new(Box::new(CuratedShuffle), Some(1))
    }

    #[test]
    fn test_board_buffer_mirrors_session_grid() {
        let app = fixed_app();
        for pos in 0..CELLS {
            let tile = app.session.tile_at(pos).unwrap();
            let expected = (tile != BLANK).then_some(tile);
            assert_eq!(app.board().tile(pos), expected);
        }
    }

    #[test]
    fn test_rejected_click_updates_status_only() {
        let mut app = fixed_app();
        let before = app.session.grid().clone();
        // The blank has no empty neighbor, so clicking it never moves a tile.
        let blank = app.session.grid().blank_position();
        app.select(blank);
        assert_eq!(app.session.grid(), &before);
        assert_eq!(app.status(), "That tile has no empty cell beside it.");
    }

    #[test]
    fn test_restart_repaints_the_board() {
        let mut app = fixed_app();
        app.restart();
        for pos in 0..CELLS {
            let tile = app.session.tile_at(pos).unwrap();
            let expected = (tile != BLANK).then_some(tile);
            assert_eq!(app.board().tile(pos), expected);
        }
        assert_eq!(app.status(), START_HINT);
    }
}
