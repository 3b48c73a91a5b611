//! Frame layout: title, board, status line.

pub mod board;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Draws the whole frame.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = chunks(area);

    let title = Paragraph::new("slidegrid - arrange tiles 1-8 in order")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    board::render_board(f, chunks[1], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);
}

/// The sub-area the board occupies; mouse hit-testing uses the same split.
pub fn board_area(area: Rect) -> Rect {
    chunks(area)[1]
}

fn chunks(area: Rect) -> [Rect; 3] {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(board::BOARD_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);
    [split[0], split[1], split[2]]
}
