//! odeview - A terminal plot viewer for ODE solution tables.
//!
//! odeview reads the whitespace-delimited table an ODE time-stepper writes
//! (`t  y0  y1` per line) and draws both signals against time as a line
//! chart with axis labels, a legend and a movable cursor.
//!
//! # Features
//!
//! - Plain text input, one row per line, `#` comments allowed
//! - Braille line chart sized to the terminal
//! - Cursor readout, zoom and pan along t
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use odeview::{data::NumericTable, plot::Figure};
//! use std::path::Path;
//!
//! let table = NumericTable::load(Path::new("test_ode_ie.txt"))?;
//! let figure = Figure::solution_plot(&table)?;
//! println!("{} samples", figure.sample_count());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod plot;
pub mod tui;
pub mod ui;
pub mod util;

pub use error::{OdeViewError, Result};

/// Input file read when none is given on the command line.
pub const DEFAULT_INPUT: &str = "test_ode_ie.txt";
