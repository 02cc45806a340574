//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::plot::{Figure, TIME_LABEL};
use crate::ui::formatters::format_stat_value;
use crate::util::{PlotLayoutConfig, Range};

/// Cursor jump for the shifted movement keys.
const FAST_STEP: usize = 10;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// A user command, decoupled from the key that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Close the viewer.
    Quit,
    /// Move the cursor towards smaller t.
    CursorLeft(usize),
    /// Move the cursor towards larger t.
    CursorRight(usize),
    /// Jump to the first sample.
    CursorHome,
    /// Jump to the last sample.
    CursorEnd,
    /// Halve the visible window around the cursor.
    ZoomIn,
    /// Double the visible window.
    ZoomOut,
    /// Shift the window towards smaller t.
    PanLeft,
    /// Shift the window towards larger t.
    PanRight,
    /// Show the whole time range again.
    ResetView,
    /// Show or hide the legend.
    ToggleLegend,
    /// Switch between dark and light colours.
    CycleTheme,
}

impl Action {
    /// Map a key press to an action. Releases and unbound keys map to `None`.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let action = match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Action::Quit,

            (_, KeyCode::Char('h')) | (_, KeyCode::Left) => Action::CursorLeft(1),
            (_, KeyCode::Char('l')) | (_, KeyCode::Right) => Action::CursorRight(1),
            (_, KeyCode::Char('H')) => Action::CursorLeft(FAST_STEP),
            (_, KeyCode::Char('L')) => Action::CursorRight(FAST_STEP),
            (_, KeyCode::Char('g')) | (_, KeyCode::Home) => Action::CursorHome,
            (_, KeyCode::Char('G')) | (_, KeyCode::End) => Action::CursorEnd,

            (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => Action::ZoomIn,
            (_, KeyCode::Char('-')) | (_, KeyCode::Char('_')) => Action::ZoomOut,
            (_, KeyCode::Char('[')) => Action::PanLeft,
            (_, KeyCode::Char(']')) => Action::PanRight,
            (_, KeyCode::Char('r')) => Action::ResetView,

            (_, KeyCode::Char('o')) => Action::ToggleLegend,
            (_, KeyCode::Char('T')) => Action::CycleTheme,
            _ => return None,
        };
        Some(action)
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The figure being shown.
    pub figure: Figure,
    /// Name of the loaded file, shown in the chart title.
    pub file_name: Option<String>,
    /// Index of the sample under the cursor.
    pub cursor: usize,
    /// Visible X window.
    pub view: Range,
    /// Whether the legend is drawn.
    pub show_legend: bool,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Layout constants.
    pub layout: PlotLayoutConfig,
}

impl App {
    /// Create a new application instance showing the whole figure.
    pub fn new(figure: Figure, file_name: Option<String>, theme: Theme) -> Self {
        let view = figure.bounds().x;
        let show_legend = figure.has_legend();
        Self {
            figure,
            file_name,
            cursor: 0,
            view,
            show_legend,
            theme,
            status: "Ready".to_string(),
            layout: PlotLayoutConfig::default(),
        }
    }

    /// Apply an action. Returns `false` once the viewer should close.
    pub fn apply(&mut self, action: Action) -> bool {
        tracing::debug!("Action: {:?}", action);
        match action {
            Action::Quit => return false,
            Action::CursorLeft(step) => self.move_cursor_to(self.cursor.saturating_sub(step)),
            Action::CursorRight(step) => self.move_cursor_to(self.cursor.saturating_add(step)),
            Action::CursorHome => self.move_cursor_to(0),
            Action::CursorEnd => self.move_cursor_to(usize::MAX),
            Action::ZoomIn => self.zoom_in(),
            Action::ZoomOut => self.zoom_out(),
            Action::PanLeft => self.pan(-0.25),
            Action::PanRight => self.pan(0.25),
            Action::ResetView => self.reset_view(),
            Action::ToggleLegend => self.toggle_legend(),
            Action::CycleTheme => self.cycle_theme(),
        }
        true
    }

    /// Full X range of the figure.
    pub fn full_range(&self) -> Range {
        self.figure.bounds().x
    }

    /// X value under the cursor.
    pub fn cursor_x(&self) -> Option<f64> {
        self.sample(0).map(|(x, _)| x)
    }

    /// Y range of the curves inside the visible window.
    pub fn visible_y_range(&self) -> Range {
        self.figure.y_range_within(self.view)
    }

    /// Cursor readout, e.g. `t=1.0000  U_0(t)=0.90000  U_C(t)=0.10000`.
    pub fn readout(&self) -> String {
        let Some(x) = self.cursor_x() else {
            return "No data".to_string();
        };

        let x_label = self.figure.x_label_text().unwrap_or(TIME_LABEL);
        let mut parts = vec![format!("{}={}", x_label, format_stat_value(x))];
        for (i, series) in self.figure.series().iter().enumerate() {
            if let Some((_, y)) = self.sample(i) {
                parts.push(format!("{}={}", series.label, format_stat_value(y)));
            }
        }
        parts.join("  ")
    }

    /// Move the cursor to `index` (clamped), following it with the view.
    pub fn move_cursor_to(&mut self, index: usize) {
        let count = self.figure.sample_count();
        if count == 0 {
            return;
        }
        self.cursor = index.min(count - 1);

        if let Some(x) = self.cursor_x().filter(|x| x.is_finite()) {
            if !self.view.contains(x) {
                let size = self.view.size();
                self.view = Range::centered(x, size).clamp_within(self.full_range());
            }
        }
    }

    /// Halve the visible window, centred on the cursor.
    pub fn zoom_in(&mut self) {
        if !self.window_is_finite() {
            return;
        }
        let full = self.full_range();
        let min_size = full.size() * self.layout.min_zoom_fraction;
        let size = (self.view.size() / 2.0).max(min_size);
        let center = self
            .cursor_x()
            .filter(|x| x.is_finite())
            .unwrap_or_else(|| self.view.center());

        self.view = Range::centered(center, size).clamp_within(full);
        self.status = format!("Zoom x{}", self.zoom_factor());
    }

    /// Double the visible window, up to the full range.
    pub fn zoom_out(&mut self) {
        if !self.window_is_finite() {
            return;
        }
        let full = self.full_range();
        let size = (self.view.size() * 2.0).min(full.size());
        self.view = Range::centered(self.view.center(), size).clamp_within(full);
        self.follow_view();
        self.status = format!("Zoom x{}", self.zoom_factor());
    }

    /// Shift the window by `fraction` of its size.
    pub fn pan(&mut self, fraction: f64) {
        if !self.window_is_finite() {
            return;
        }
        let shift = self.view.size() * fraction;
        self.view = Range::new(self.view.min + shift, self.view.max + shift)
            .clamp_within(self.full_range());
        self.follow_view();
    }

    /// Show the full X range.
    pub fn reset_view(&mut self) {
        self.view = self.full_range();
        self.status = "View reset".to_string();
    }

    /// Show or hide the legend.
    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
        self.status = if self.show_legend {
            "Legend on".to_string()
        } else {
            "Legend off".to_string()
        };
    }

    /// Switch to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Whether the legend should be drawn right now.
    pub fn legend_visible(&self) -> bool {
        self.figure.has_legend() && self.show_legend
    }

    /// Zoom and pan need a window whose width fits in an `f64`.
    fn window_is_finite(&mut self) -> bool {
        let finite = self.full_range().size().is_finite() && self.view.size().is_finite();
        if !finite {
            tracing::warn!("X range too wide to zoom or pan: {:?}", self.full_range());
            self.status = "Range too wide to zoom".to_string();
        }
        finite
    }

    fn sample(&self, series: usize) -> Option<(f64, f64)> {
        self.figure
            .series()
            .get(series)
            .and_then(|s| s.points.get(self.cursor))
            .copied()
    }

    /// Pull the cursor back inside the window after the window moved.
    fn follow_view(&mut self) {
        let Some(x) = self.cursor_x() else { return };
        if self.view.contains(x) {
            return;
        }
        if let Some(index) = self
            .figure
            .series()
            .first()
            .and_then(|s| s.nearest_index(self.view.center()))
        {
            self.cursor = index;
        }
    }

    fn zoom_factor(&self) -> String {
        let factor = self.full_range().size() / self.view.size();
        format!("{:.0}", factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NumericTable;

    fn linear_app(rows: usize) -> App {
        let text: String = (0..rows)
            .map(|i| format!("{} {} {}\n", i, i * 2, i * 3))
            .collect();
        let table = NumericTable::parse(&text).unwrap();
        App::new(
            Figure::solution_plot(&table).unwrap(),
            None,
            Theme::default(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_with_full_view() {
        let app = linear_app(11);
        assert_eq!(app.view, Range::new(0.0, 10.0));
        assert_eq!(app.cursor, 0);
        assert!(app.legend_visible());
    }

    #[test]
    fn cursor_is_clamped() {
        let mut app = linear_app(5);
        app.apply(Action::CursorLeft(1));
        assert_eq!(app.cursor, 0);
        app.apply(Action::CursorRight(100));
        assert_eq!(app.cursor, 4);
        app.apply(Action::CursorHome);
        assert_eq!(app.cursor, 0);
        app.apply(Action::CursorEnd);
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn readout_lists_every_curve() {
        let mut app = linear_app(3);
        app.apply(Action::CursorRight(1));
        assert_eq!(app.readout(), "t=1.0000  U_0(t)=2.0000  U_C(t)=3.0000");
    }

    #[test]
    fn zoom_in_centres_on_cursor_and_reset_restores() {
        let mut app = linear_app(101);
        app.move_cursor_to(50);
        app.apply(Action::ZoomIn);
        assert_eq!(app.view, Range::new(25.0, 75.0));

        app.apply(Action::ZoomOut);
        assert_eq!(app.view, Range::new(0.0, 100.0));

        app.apply(Action::ZoomIn);
        app.apply(Action::ResetView);
        assert_eq!(app.view, app.full_range());
    }

    #[test]
    fn zoom_in_near_edge_stays_inside_data() {
        let mut app = linear_app(101);
        app.apply(Action::ZoomIn);
        assert_eq!(app.view, Range::new(0.0, 50.0));
    }

    #[test]
    fn pan_is_clamped_and_drags_cursor() {
        let mut app = linear_app(101);
        app.apply(Action::ZoomIn);
        app.apply(Action::ZoomIn);
        assert_eq!(app.view, Range::new(0.0, 25.0));

        for _ in 0..20 {
            app.apply(Action::PanRight);
        }
        assert_eq!(app.view, Range::new(75.0, 100.0));
        let x = app.cursor_x().unwrap();
        assert!(app.view.contains(x));
    }

    #[test]
    fn overflowing_range_leaves_view_untouched() {
        let table = NumericTable::parse("-1e308 1 2\n1e308 3 4\n").unwrap();
        let mut app = App::new(
            Figure::solution_plot(&table).unwrap(),
            None,
            Theme::default(),
        );
        assert!(app.full_range().size().is_infinite());

        for action in [
            Action::ZoomIn,
            Action::PanRight,
            Action::ZoomOut,
            Action::PanLeft,
            Action::CursorEnd,
        ] {
            app.apply(action);
            assert!(!app.view.min.is_nan() && !app.view.max.is_nan());
        }
        assert_eq!(app.view, Range::new(-1e308, 1e308));
        assert_eq!(app.status, "Range too wide to zoom");
        assert_eq!(app.cursor_x(), Some(1e308));
    }

    #[test]
    fn view_follows_cursor() {
        let mut app = linear_app(101);
        app.apply(Action::ZoomIn);
        app.apply(Action::CursorEnd);
        assert!(app.view.contains(100.0));
    }

    #[test]
    fn legend_and_theme_toggle() {
        let mut app = linear_app(3);
        app.apply(Action::ToggleLegend);
        assert!(!app.legend_visible());
        app.apply(Action::CycleTheme);
        assert_eq!(app.theme, Theme::GruvboxLight);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = linear_app(3);
        assert!(app.apply(Action::ZoomIn));
        assert!(!app.apply(Action::Quit));
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(Action::from_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(Action::from_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            Action::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            Action::from_key(press(KeyCode::Right)),
            Some(Action::CursorRight(1))
        );
        assert_eq!(
            Action::from_key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT)),
            Some(Action::CursorRight(FAST_STEP))
        );
        assert_eq!(Action::from_key(press(KeyCode::Char('+'))), Some(Action::ZoomIn));
        assert_eq!(Action::from_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(Action::from_key(key), None);
    }
}
