//! Terminal frontend for the slidegrid eight-puzzle.

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use slidegrid_core::{CuratedShuffle, FullShuffle, RandomWalkShuffle, Shuffle};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// How the starting board is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShuffleArg {
    /// Uniform pick from the curated boards.
    Curated,
    /// Random walk of legal slides from the solved grid.
    Walk,
    /// Curated board scrambled further by a short walk.
    Full,
}

#[derive(Debug, Parser)]
#[command(name = "slidegrid", about = "3x3 sliding-tile puzzle in the terminal")]
struct Args {
    /// RNG seed for a reproducible board.
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffle strategy for new boards.
    #[arg(long, value_enum, default_value_t = ShuffleArg::Full)]
    shuffle: ShuffleArg,

    /// Walk length for the walk strategy.
    #[arg(long, default_value_t = slidegrid_core::DEFAULT_WALK_STEPS)]
    steps: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "starting slidegrid");

    let strategy: Box<dyn Shuffle> = match args.shuffle {
        ShuffleArg::Curated => Box::new(CuratedShuffle),
        ShuffleArg::Walk => Box::new(RandomWalkShuffle::with_steps(args.steps)),
        ShuffleArg::Full => Box::new(FullShuffle),
    };
    let app = App::new(strategy, args.seed);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        let completed = terminal.draw(|f| ui::draw(f, &app))?;
        let area = completed.area;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char(c @ '1'..='9') => app.select(c as usize - '1' as usize),
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let geometry = ui::board::Geometry::new(ui::board_area(area));
                if let Some(pos) = geometry.position_at(mouse.column, mouse.row) {
                    app.select(pos);
                }
            }
            _ => {}
        }
    }
}
