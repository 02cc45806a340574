//! User interface rendering.

mod chart;
pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI: chart on top, status bar and keymap bar below.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    chart::draw_chart(f, chunks[0], app, &colors);
    draw_status(f, chunks[1], app, &colors);
    draw_keymap(f, chunks[2], &colors);
}
