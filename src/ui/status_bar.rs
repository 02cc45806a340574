//! Status bar UI component.

use super::formatters::format_number;
use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar: cursor readout, sample count and the last message.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let text = format!(
        " {} | {} samples | {}",
        app.readout(),
        format_number(app.figure.sample_count()),
        app.status
    );

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
