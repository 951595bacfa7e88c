#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A two-dimensional grid of string cells, as extracted from a spreadsheet.
///
/// Grids carry no header row. Rows may have been ragged in the source file;
/// accessors treat any missing cell as the empty string, so two grids of
/// different shapes can still be compared over their overlapping rectangle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    /// Row-major cell values.
    rows: Vec<Vec<String>>,
}

impl CellGrid {
    /// Creates a grid from row-major cell values.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Reads a headerless CSV file into a grid.
    ///
    /// Quoted fields are honored and rows are allowed to differ in length;
    /// absent trailing cells read back as empty strings.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .with_context(|| format!("Failed to read CSV record from {}", path.display()))?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(Self { rows })
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken as the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the cell at `(row, col)`, or the empty string when the
    /// position falls outside the stored values.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True when the grid holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for CellGrid {
    fn from_iter<T: IntoIterator<Item = Vec<S>>>(iter: T) -> Self {
        Self {
            rows: iter
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}
