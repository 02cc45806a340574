//! Layout configuration constants for the chart view.

/// Configuration for the line chart layout.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin on each side).
    pub y_axis_padding_factor: f64,
    /// Columns taken by the Y-axis labels and chart borders.
    pub axis_margin: u16,
    /// Braille dots per terminal cell horizontally.
    pub dots_per_cell: usize,
    /// Smallest visible X window as a fraction of the full range.
    pub min_zoom_fraction: f64,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            axis_margin: 10,
            dots_per_cell: 2,
            min_zoom_fraction: 1.0 / 1024.0,
        }
    }
}

impl PlotLayoutConfig {
    /// Most points worth drawing in a chart `width` cells wide.
    pub fn max_points(&self, width: u16) -> usize {
        (width.saturating_sub(self.axis_margin) as usize).max(1) * self.dots_per_cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_points_never_zero() {
        let config = PlotLayoutConfig::default();
        assert_eq!(config.max_points(0), 2);
        assert_eq!(config.max_points(110), 200);
    }
}
