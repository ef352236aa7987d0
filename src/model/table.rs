//! In-memory tabular data.
//!
//! A [`Table`] is an ordered header row plus ordered data rows. Cells are
//! untyped text; numeric coercion happens only where an operation needs it
//! (sorting, risk banding), never by mutating the stored cells.

use serde::Serialize;

/// An ordered, named-column table of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// Data rows, in file order. Every row has `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of the first column whose name contains any of the given
    /// fragments, case-insensitive.
    #[must_use]
    pub fn column_index_containing(&self, fragments: &[&str]) -> Option<usize> {
        self.headers.iter().position(|h| {
            let lower = h.to_lowercase();
            fragments.iter().any(|f| lower.contains(f))
        })
    }

    /// Cell at (row, column name), if both exist.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// Iterate the values of one column in row order.
    pub fn column_values<'a>(&'a self, column: &str) -> impl Iterator<Item = &'a str> + 'a {
        let col = self.column_index(column);
        self.rows
            .iter()
            .filter_map(move |row| col.and_then(|c| row.get(c)).map(String::as_str))
    }

    /// Count of distinct non-empty values in a column.
    #[must_use]
    pub fn distinct_count(&self, column: &str) -> usize {
        let mut seen: indexmap::IndexSet<&str> = indexmap::IndexSet::new();
        for value in self.column_values(column) {
            if !value.trim().is_empty() {
                seen.insert(value);
            }
        }
        seen.len()
    }

    /// A copy containing only the first `n` rows (all rows when fewer).
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
