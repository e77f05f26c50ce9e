//! Terminal UI: play, scrub through history, branch.

mod app;
mod input;
mod ui;

pub use app::{App, Control, Focus};
pub use input::move_cursor;
pub use ui::draw;

use crate::config::GameConfig;
use crate::logging;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the player quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file; stdout belongs to the terminal UI
    logging::init_file(config.log_file(), config.log_filter())?;

    info!(title = %config.title(), "Starting rewind TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_screen, restore_screen)?;

    let res = run_app(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn enter_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_screen() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Runs `setup`; if it fails, runs `restore` before returning the error.
///
/// Raw mode is already on when terminal setup runs, so a failed setup must
/// hand the terminal back in cooked mode.
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    let res = setup();
    if let Err(err) = &res {
        error!(error = ?err, "Terminal setup failed, restoring");
        restore();
    }
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, config: &GameConfig) -> Result<()> {
    let mut app = App::new();

    loop {
        terminal.draw(|f| draw(f, &app, config))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
