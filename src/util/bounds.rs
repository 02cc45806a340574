//! Axis ranges and 2D data bounds.

/// A closed interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower end.
    pub min: f64,
    /// Upper end.
    pub max: f64,
}

/// X and Y ranges of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Horizontal range.
    pub x: Range,
    /// Vertical range.
    pub y: Range,
}

impl Default for Range {
    fn default() -> Self {
        Range::new(0.0, 1.0)
    }
}

impl Range {
    /// Create a range. The ends are stored as given.
    pub const fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    /// Smallest range covering every finite value, or `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Range>, v| match acc {
                None => Some(Range::new(v, v)),
                Some(r) => Some(Range::new(r.min.min(v), r.max.max(v))),
            })
    }

    /// Width of the range.
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Whether `value` lies inside the range, ends included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Smallest range covering both.
    pub fn union(&self, other: Range) -> Range {
        Range::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Grow both ends by `fract` of the current size.
    pub fn pad_by(self, fract: f64) -> Range {
        let amount = self.size() * fract;
        Range::new(self.min - amount, self.max + amount)
    }

    /// Give a zero-width range some room so it can be drawn.
    ///
    /// A non-zero constant widens by 10% of its magnitude, zero by 0.5
    /// either side.
    pub fn widen_degenerate(self) -> Range {
        if self.size() > 0.0 {
            return self;
        }
        let half = if self.min != 0.0 {
            self.min.abs() * 0.1
        } else {
            0.5
        };
        Range::new(self.min - half, self.max + half)
    }

    /// Range of the given size centred on `center`.
    pub fn centered(center: f64, size: f64) -> Range {
        Range::new(center - size / 2.0, center + size / 2.0)
    }

    /// Shift (and shrink if needed) so the range lies inside `outer`.
    pub fn clamp_within(self, outer: Range) -> Range {
        if self.size() >= outer.size() {
            return outer;
        }
        if self.min < outer.min {
            Range::new(outer.min, outer.min + self.size())
        } else if self.max > outer.max {
            Range::new(outer.max - self.size(), outer.max)
        } else {
            self
        }
    }
}

impl Bounds {
    /// Create bounds from two ranges.
    pub const fn new(x: Range, y: Range) -> Self {
        Bounds { x, y }
    }

    /// Smallest bounds covering both.
    pub fn union(&self, other: Bounds) -> Bounds {
        Bounds::new(self.x.union(other.x), self.y.union(other.y))
    }
}
