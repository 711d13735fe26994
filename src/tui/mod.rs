//! Terminal UI for the game.

mod app;
mod input;
mod move_list_view;
mod ui;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use timeline_tictactoe::MoveOrder;
use tracing::{debug, error, info, instrument};

use crate::AppConfig;

pub use app::{App, AppAction, Focus};
pub use input::{KeyCommand, command_for, move_cursor};
pub use move_list_view::MoveListView;
pub use ui::{HitMap, cell_rects, draw};

/// Restores the terminal when dropped, including during a panic unwind.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen.
    ///
    /// Once raw mode is on, any later failure drops the guard and undoes it.
    fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
        let mut stdout = io::stdout();
        let restored = if self.mouse {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show)
        } else {
            execute!(stdout, LeaveAlternateScreen, Show)
        };
        if let Err(e) = restored {
            error!(error = %e, "Failed to restore terminal");
        }
        debug!("Terminal restored");
    }
}

/// Runs the interactive game until the user quits.
///
/// Logging must already be directed away from the terminal.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Tic-Tac-Toe Timeline TUI");

    let guard = TerminalGuard::enter(*config.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let order = if *config.newest_first() {
        MoveOrder::NewestFirst
    } else {
        MoveOrder::OldestFirst
    };
    let mut app = App::new(order);
    let poll = Duration::from_millis(*config.poll_interval_ms());
    let res = run_app(&mut terminal, &mut app, || next_event(poll));

    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI exited");
    res
}

/// Waits up to `poll` for a terminal event.
fn next_event(poll: Duration) -> Result<Option<Event>> {
    if event::poll(poll)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Event loop: redraw after every handled event, exit on quit.
///
/// `next_event` returns `None` when the poll timed out.
fn run_app<B, E>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    E: FnMut() -> Result<Option<Event>>,
{
    let mut redraw = true;
    loop {
        if redraw {
            terminal.draw(|f| ui::draw(f, app))?;
            redraw = false;
        }

        let Some(event) = next_event()? else {
            continue;
        };
        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                AppAction::Continue
            }
            _ => continue,
        };
        redraw = true;

        if action == AppAction::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
