//! Whitespace-delimited numeric table reader.

use crate::error::{OdeViewError, Result};
use ndarray::{Array2, ArrayView1};
use std::path::Path;

/// Character that starts a comment running to the end of the line.
const COMMENT_CHAR: char = '#';

/// Rows × columns of `f64` values parsed from a text file.
///
/// Every row has the same number of columns and the table holds at least
/// one row. The table is never mutated after it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    data: Array2<f64>,
}

impl NumericTable {
    /// Read and parse a table from a file.
    ///
    /// A missing or unreadable file yields [`OdeViewError::FileNotFound`];
    /// anything wrong with the contents yields [`OdeViewError::Parse`].
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).map_err(|e| OdeViewError::file_not_found(path.to_path_buf(), e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| OdeViewError::parse(format!("file is not valid UTF-8: {}", e)))?;

        let table = Self::parse(&text)?;
        tracing::info!(
            "Loaded {} rows x {} columns from {}",
            table.rows(),
            table.cols(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a table from text: one row per line, columns separated by
    /// arbitrary whitespace.
    ///
    /// Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut values = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let content = match raw_line.find(COMMENT_CHAR) {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };

            let start = values.len();
            for token in content.split_whitespace() {
                let value = token.parse::<f64>().map_err(|_| {
                    OdeViewError::parse_at(line_no, format!("invalid number '{}'", token))
                })?;
                values.push(value);
            }

            let found = values.len() - start;
            if found == 0 {
                continue;
            }

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(OdeViewError::parse_at(
                        line_no,
                        format!("expected {} columns, found {}", expected, found),
                    ));
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(cols) = width else {
            return Err(OdeViewError::parse("no numeric rows found"));
        };

        if values.iter().any(|v| !v.is_finite()) {
            tracing::warn!("Table contains non-finite values; they are skipped when plotting");
        }

        let data = Array2::from_shape_vec((rows, cols), values)
            .map_err(|e| OdeViewError::parse(format!("inconsistent table shape: {}", e)))?;
        Ok(Self { data })
    }

    /// Build a table from an existing array.
    ///
    /// An array with no rows or no columns is rejected the same way an empty
    /// file is.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(OdeViewError::parse("no numeric rows found"));
        }
        Ok(Self { data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// View of one column, or `None` if the index is past the last column.
    pub fn column(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.cols()).then(|| self.data.column(index))
    }

    /// View of one row, or `None` if the index is past the last row.
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.rows()).then(|| self.data.row(index))
    }

    /// The underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Fail with [`OdeViewError::InsufficientColumns`] unless the table has
    /// at least `required` columns.
    pub fn require_columns(&self, required: usize) -> Result<()> {
        if self.cols() < required {
            return Err(OdeViewError::insufficient_columns(self.cols(), required));
        }
        Ok(())
    }

    /// Serialise in the same format [`NumericTable::parse`] reads.
    ///
    /// Values use the shortest representation that parses back to the same
    /// `f64`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in self.data.rows() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
        out
    }
}
