//! Error types for odeview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for odeview operations.
pub type Result<T> = std::result::Result<T, OdeViewError>;

/// Errors that can occur in odeview.
#[derive(Debug, Error)]
pub enum OdeViewError {
    /// The input file does not exist or cannot be read.
    #[error("File not found or unreadable: {path}")]
    FileNotFound {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying open/read failure.
        #[source]
        source: std::io::Error,
    },

    /// The input contains a non-numeric token, a ragged row, or no rows at all.
    #[error("Parse error{}: {message}", describe_line(.line))]
    Parse {
        /// 1-based line number, `None` when the problem is the file as a whole.
        line: Option<usize>,
        /// What was wrong with the input.
        message: String,
    },

    /// The table is narrower than the figure needs.
    #[error("Insufficient columns: found {found}, need at least {required}")]
    InsufficientColumns {
        /// Columns in the table.
        found: usize,
        /// Columns the figure needs.
        required: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OdeViewError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileNotFound { path, source }
    }

    /// Create a Parse error anchored at a 1-based line number.
    pub fn parse_at(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a Parse error that concerns the file as a whole.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            line: None,
            message: message.into(),
        }
    }

    /// Create an InsufficientColumns error.
    pub fn insufficient_columns(found: usize, required: usize) -> Self {
        Self::InsufficientColumns { found, required }
    }
}

fn describe_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" on line {}", l)).unwrap_or_default()
}
