//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP_TEXT: &str =
    "q/Esc:quit | hl/←→:cursor | HL:x10 | gG:ends | +-:zoom | []:pan | r:reset | o:legend | T:theme";

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP_TEXT).style(Style::default().fg(colors.keymap_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
