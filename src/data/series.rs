//! Labelled (x, y) series derived from table columns.

use super::NumericTable;
use crate::error::{OdeViewError, Result};
use crate::util::{Bounds, Range};

/// One plotted curve: a label and its (x, y) points in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Points as `(x, y)`, one per table row.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Pair column `y_col` with column `x_col`.
    pub fn from_columns(
        table: &NumericTable,
        x_col: usize,
        y_col: usize,
        label: impl Into<String>,
    ) -> Result<Self> {
        let required = x_col.max(y_col) + 1;
        let (Some(xs), Some(ys)) = (table.column(x_col), table.column(y_col)) else {
            return Err(OdeViewError::insufficient_columns(table.cols(), required));
        };

        Ok(Self {
            label: label.into(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X values.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    /// Y values.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }

    /// Range of the finite X values.
    pub fn x_range(&self) -> Option<Range> {
        Range::from_values(self.points.iter().map(|&(x, _)| x))
    }

    /// Range of the finite Y values.
    pub fn y_range(&self) -> Option<Range> {
        Range::from_values(self.points.iter().map(|&(_, y)| y))
    }

    /// Bounds of the finite points, or `None` when no point is finite.
    pub fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(self.x_range()?, self.y_range()?))
    }

    /// Range of Y over the points whose X lies in `window`.
    pub fn y_range_within(&self, window: Range) -> Option<Range> {
        Range::from_values(
            self.points
                .iter()
                .filter(|&&(x, _)| window.contains(x))
                .map(|&(_, y)| y),
        )
    }

    /// Finite points whose X lies in `window`.
    pub fn points_within(&self, window: Range) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .filter(|&(x, y)| x.is_finite() && y.is_finite() && window.contains(x))
            .collect()
    }

    /// Index of the point whose X is closest to `x`.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, (px, _))| px.is_finite())
            .min_by(|(_, (a, _)), (_, (b, _))| (a - x).abs().total_cmp(&(b - x).abs()))
            .map(|(i, _)| i)
    }
}

/// Reduce `points` to at most `max_points` by even stride sampling.
///
/// The last point is always kept so the curve reaches the right edge.
pub fn downsample(points: &[(f64, f64)], max_points: usize) -> Vec<(f64, f64)> {
    let max_points = max_points.max(2);
    if points.len() <= max_points {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut out: Vec<(f64, f64)> = (0..max_points - 1)
        .map(|i| points[i * last / (max_points - 1)])
        .collect();
    out.push(points[last]);
    out
}
