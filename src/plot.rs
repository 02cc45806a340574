//! Figure model: curves, axis labels and legend.
//!
//! A [`Figure`] is pure data. Drawing it is the job of [`crate::ui`].

use crate::data::{NumericTable, Series};
use crate::error::Result;
use crate::util::{Bounds, Range};

/// X-axis label of the solution plot.
pub const TIME_LABEL: &str = "t";
/// Y-axis label of the solution plot.
pub const SIGNAL_LABEL: &str = "y(t), y'(t)";
/// Legend label of column 1.
pub const FIRST_SIGNAL_LABEL: &str = "U_0(t)";
/// Legend label of column 2.
pub const SECOND_SIGNAL_LABEL: &str = "U_C(t)";
/// Columns the solution plot reads: time and two signals.
pub const REQUIRED_COLUMNS: usize = 3;

/// A set of curves sharing one pair of axes.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    series: Vec<Series>,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard ODE solution plot from a table.
    ///
    /// Column 0 is time; column 1 is plotted as `U_0(t)` and column 2 as
    /// `U_C(t)`. Further columns are ignored. Fails with
    /// [`crate::OdeViewError::InsufficientColumns`] if the table has fewer
    /// than three columns.
    pub fn solution_plot(table: &NumericTable) -> Result<Self> {
        table.require_columns(REQUIRED_COLUMNS)?;

        let mut figure = Figure::new();
        figure
            .x_label(TIME_LABEL)
            .y_label(SIGNAL_LABEL)
            .legend(true)
            .add_series(Series::from_columns(table, 0, 1, FIRST_SIGNAL_LABEL)?)
            .add_series(Series::from_columns(table, 0, 2, SECOND_SIGNAL_LABEL)?);

        if table.cols() > REQUIRED_COLUMNS {
            tracing::debug!(
                "Ignoring {} extra columns",
                table.cols() - REQUIRED_COLUMNS
            );
        }
        Ok(figure)
    }

    /// Set the title.
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the X-axis label.
    pub fn x_label(&mut self, label: &str) -> &mut Self {
        self.x_label = Some(label.to_string());
        self
    }

    /// Set the Y-axis label.
    pub fn y_label(&mut self, label: &str) -> &mut Self {
        self.y_label = Some(label.to_string());
        self
    }

    /// Enable or disable the legend.
    pub fn legend(&mut self, enabled: bool) -> &mut Self {
        self.legend = enabled;
        self
    }

    /// Append a curve.
    pub fn add_series(&mut self, series: Series) -> &mut Self {
        self.series.push(series);
        self
    }

    /// Title, if any.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// X-axis label, if any.
    pub fn x_label_text(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Y-axis label, if any.
    pub fn y_label_text(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Whether the legend is enabled.
    pub fn has_legend(&self) -> bool {
        self.legend
    }

    /// All curves in drawing order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Number of samples along X (taken from the first curve).
    pub fn sample_count(&self) -> usize {
        self.series.first().map_or(0, Series::len)
    }

    /// Drawable bounds covering every curve.
    ///
    /// Zero-width ranges are widened and a figure with no finite points
    /// falls back to the unit square.
    pub fn bounds(&self) -> Bounds {
        let data = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| a.union(b))
            .unwrap_or(Bounds::new(Range::default(), Range::default()));

        Bounds::new(data.x.widen_degenerate(), data.y.widen_degenerate())
    }

    /// Y range of every curve restricted to the X `window`, widened so it
    /// can be drawn.
    pub fn y_range_within(&self, window: Range) -> Range {
        self.series
            .iter()
            .filter_map(|s| s.y_range_within(window))
            .reduce(|a, b| a.union(b))
            .unwrap_or_else(|| self.bounds().y)
            .widen_degenerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OdeViewError;

    #[test]
    fn solution_plot_has_labels_and_two_curves() {
        let table = NumericTable::parse("0.0 1.0 0.0\n1.0 0.9 0.1\n2.0 0.8 0.2\n").unwrap();
        let figure = Figure::solution_plot(&table).unwrap();

        assert_eq!(figure.x_label_text(), Some("t"));
        assert_eq!(figure.y_label_text(), Some("y(t), y'(t)"));
        assert!(figure.has_legend());

        let labels: Vec<&str> = figure.series().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["U_0(t)", "U_C(t)"]);
        assert_eq!(figure.series()[0].ys(), vec![1.0, 0.9, 0.8]);
        assert_eq!(figure.series()[1].ys(), vec![0.0, 0.1, 0.2]);
        assert_eq!(figure.sample_count(), 3);
    }

    #[test]
    fn solution_plot_needs_three_columns() {
        let table = NumericTable::parse("0 1\n1 2\n").unwrap();
        assert!(matches!(
            Figure::solution_plot(&table),
            Err(OdeViewError::InsufficientColumns {
                found: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn single_row_gives_drawable_bounds() {
        let table = NumericTable::parse("0 1 0\n").unwrap();
        let bounds = Figure::solution_plot(&table).unwrap().bounds();
        assert!(bounds.x.size() > 0.0);
        assert!(bounds.y.size() > 0.0);
        assert!(bounds.x.contains(0.0));
        assert!(bounds.y.contains(0.0) && bounds.y.contains(1.0));
    }

    #[test]
    fn bounds_cover_both_curves() {
        let table = NumericTable::parse("0 1 -2\n4 3 5\n").unwrap();
        let bounds = Figure::solution_plot(&table).unwrap().bounds();
        assert_eq!(bounds.x, Range::new(0.0, 4.0));
        assert_eq!(bounds.y, Range::new(-2.0, 5.0));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let table = NumericTable::parse("0 1 2 9 9\n1 3 4 9 9\n").unwrap();
        let figure = Figure::solution_plot(&table).unwrap();

        assert_eq!(figure.series().len(), 2);
        assert_eq!(figure.series()[0].label, FIRST_SIGNAL_LABEL);
        assert_eq!(figure.series()[1].label, SECOND_SIGNAL_LABEL);
        assert_eq!(figure.series()[0].ys(), vec![1.0, 3.0]);
        assert_eq!(figure.series()[1].ys(), vec![2.0, 4.0]);
        assert_eq!(figure.bounds().y, Range::new(1.0, 4.0));
    }

    #[test]
    fn non_finite_values_keep_bounds_finite() {
        let table = NumericTable::parse("0 nan 1\n1 inf -inf\n").unwrap();
        let figure = Figure::solution_plot(&table).unwrap();
        let bounds = figure.bounds();

        assert_eq!(bounds.x, Range::new(0.0, 1.0));
        assert!(bounds.y.min.is_finite() && bounds.y.max.is_finite());
        assert!(bounds.y.contains(1.0));
        assert!(bounds.y.size() > 0.0);
    }

    #[test]
    fn empty_figure_falls_back_to_unit_square() {
        let bounds = Figure::new().bounds();
        assert_eq!(bounds.x, Range::new(0.0, 1.0));
        assert_eq!(bounds.y, Range::new(0.0, 1.0));
    }
}
