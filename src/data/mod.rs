//! Data reading and representation.
//!
//! This module reads whitespace-delimited numeric tables and derives the
//! labelled (x, y) series that get plotted.

mod series;
mod table;

pub use series::{downsample, Series};
pub use table::NumericTable;
