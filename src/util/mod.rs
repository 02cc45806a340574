//! Utility types.
//!
//! This module provides axis range arithmetic and layout constants
//! shared by the plot model and the chart renderer.

mod bounds;
mod layout_config;

pub use bounds::{Bounds, Range};
pub use layout_config::PlotLayoutConfig;
