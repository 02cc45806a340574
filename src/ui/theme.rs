//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Axis and label text color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Cursor line color.
    pub cursor: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar foreground color.
    pub keymap_fg: Color,
    /// Curve colors, used in series order.
    pub series: [Color; 4],
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(213, 196, 161),
                border: Color::Rgb(102, 92, 84),
                cursor: Color::Rgb(250, 189, 47),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_fg: Color::Rgb(168, 153, 132),
                series: [
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(251, 73, 52),
                    Color::Rgb(184, 187, 38),
                    Color::Rgb(211, 134, 155),
                ],
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(80, 73, 69),
                border: Color::Rgb(213, 196, 161),
                cursor: Color::Rgb(181, 118, 20),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_fg: Color::Rgb(124, 111, 100),
                series: [
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(157, 0, 6),
                    Color::Rgb(121, 116, 14),
                    Color::Rgb(143, 63, 113),
                ],
            },
        }
    }

    /// Color for the curve at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }
}
