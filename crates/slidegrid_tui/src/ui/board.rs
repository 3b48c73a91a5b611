//! Board rendering: the retained cell buffer and its on-screen geometry.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use slidegrid_core::{RenderPort, CELLS, COLUMN};

use crate::app::App;

/// Cell padding in terminal columns/rows.
const PAD: u16 = 1;
/// Cell width in terminal columns.
const CELL_W: u16 = 7;
/// Cell height in terminal rows.
const CELL_H: u16 = 3;

/// Full board width, three padded cells plus the leading pad.
pub const BOARD_WIDTH: u16 = PAD + COLUMN as u16 * (CELL_W + PAD);
/// Full board height.
pub const BOARD_HEIGHT: u16 = PAD + COLUMN as u16 * (CELL_H + PAD);

/// Retained 9-cell drawing surface.
///
/// The core repaints it through [`RenderPort`]; the board widget only
/// reads it. `None` cells render as the gap.
#[derive(Debug, Clone, Default)]
pub struct BoardBuffer {
    cells: [Option<u8>; CELLS],
}

impl BoardBuffer {
    /// Tile painted at `pos`, if any.
    pub fn tile(&self, pos: usize) -> Option<u8> {
        self.cells.get(pos).copied().flatten()
    }
}

impl RenderPort for BoardBuffer {
    fn draw_tile(&mut self, tile: u8, pos: usize) {
        if let Some(cell) = self.cells.get_mut(pos) {
            *cell = Some(tile);
        }
    }

    fn clear_cell(&mut self, pos: usize) {
        if let Some(cell) = self.cells.get_mut(pos) {
            *cell = None;
        }
    }
}

/// On-screen placement of the board's cells.
///
/// Owns the pointer-to-cell mapping: a padded 3x3 layout centered in the
/// available area, with clicks resolved by the same cell-size/padding
/// arithmetic that positions the cells.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    board: Rect,
}

impl Geometry {
    /// Centers the board in `area`.
    pub fn new(area: Rect) -> Self {
        Self {
            board: center_rect(area, BOARD_WIDTH, BOARD_HEIGHT),
        }
    }

    /// Screen rectangle of the cell at `pos`.
    pub fn cell_rect(&self, pos: usize) -> Option<Rect> {
        if pos >= CELLS {
            return None;
        }
        let col = (pos % COLUMN) as u16;
        let row = (pos / COLUMN) as u16;
        Some(Rect {
            x: self.board.x + PAD + col * (CELL_W + PAD),
            y: self.board.y + PAD + row * (CELL_H + PAD),
            width: CELL_W,
            height: CELL_H,
        })
    }

    /// Grid position under a terminal coordinate, if it lands on the board.
    pub fn position_at(&self, column: u16, row: u16) -> Option<usize> {
        if column < self.board.x || row < self.board.y {
            return None;
        }
        let col = ((column - self.board.x) / (CELL_W + PAD)) as usize;
        let line = ((row - self.board.y) / (CELL_H + PAD)) as usize;
        (col < COLUMN && line < COLUMN).then_some(line * COLUMN + col)
    }
}

/// Renders the board from the app's painted buffer.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let geometry = Geometry::new(area);
    for pos in 0..CELLS {
        let Some(rect) = geometry.cell_rect(pos) else {
            continue;
        };
        if rect.right() > area.right() || rect.bottom() > area.bottom() {
            continue;
        }
        render_cell(f, rect, app, pos);
    }
}

fn render_cell(f: &mut Frame, rect: Rect, app: &App, pos: usize) {
    let (label, style) = match app.board().tile(pos) {
        Some(tile) if app.finished() => (
            format!("{}", tile + 1),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Some(tile) => (
            format!("{}", tile + 1),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        None => (String::new(), Style::default().fg(Color::DarkGray)),
    };
    let cell = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().style(Style::default().fg(Color::DarkGray)));
    f.render_widget(cell, rect);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
