//! Terminal session: raw mode, alternate screen and the event loop.

use crate::app::{Action, App, Theme};
use crate::data::NumericTable;
use crate::error::Result;
use crate::plot::Figure;
use crate::ui;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Plot the two signals of `table` against time and block until the user
/// closes the view.
///
/// Fails with [`crate::OdeViewError::InsufficientColumns`] before touching
/// the terminal if the table has fewer than three columns.
pub fn render(table: &NumericTable, file_name: Option<String>, theme: Theme) -> Result<()> {
    let figure = Figure::solution_plot(table)?;
    show(App::new(figure, file_name, theme))
}

/// Take over the terminal, run the viewer, and restore the terminal.
///
/// Every restore step runs even when the viewer or an earlier step failed.
/// The viewer's own error wins over a restore error.
pub fn show(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = restore_terminal(&mut stdout);
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal(&mut io::stdout());
            return Err(e.into());
        }
    };

    tracing::info!("Viewer opened");
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    let restored = restore_terminal(terminal.backend_mut());
    let cursor = terminal.show_cursor();
    tracing::info!("Viewer closed");

    res?;
    restored?;
    cursor?;
    Ok(())
}

/// Leave raw mode and the alternate screen on `out`.
///
/// Both steps are attempted; the first failure is returned.
fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen);
    if let Err(e) = &raw {
        tracing::warn!("Failed to leave raw mode: {}", e);
    }
    raw.and(screen)
}

/// Draw, wait for an event, apply it; repeat until a quit action.
///
/// Returns the final state.
pub fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<App>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        match next_event()? {
            Event::Key(key) => {
                if let Some(action) = Action::from_key(key) {
                    if !app.apply(action) {
                        return Ok(app);
                    }
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!("Resized to {}x{}", width, height);
            }
            _ => {}
        }
    }
}
