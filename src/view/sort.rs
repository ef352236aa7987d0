//! Descending sort with numeric coercion.
//!
//! Sort keys are text cells. Ordering coerces each cell to a number where
//! possible; cells that do not coerce sort after every numeric cell, and
//! ties keep the incoming row order (the sort is stable throughout).

use crate::model::Table;
use std::cmp::Ordering;

/// Column-name fragments that mark the salary sort column.
const SALARY_FRAGMENTS: [&str; 2] = ["salary", "pay"];

/// Coerce a cell to a number for ordering purposes.
///
/// Tolerates currency notation: surrounding whitespace, a leading `$`, and
/// thousands-separator commas are stripped before parsing. Returns `None`
/// for anything that still fails to parse; the value is used only for
/// ordering and is never written back into the table.
#[must_use]
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    let stripped: String = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    stripped.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Index of the first column whose name contains "salary" or "pay",
/// case-insensitive.
#[must_use]
pub fn salary_sort_column(table: &Table) -> Option<usize> {
    table.column_index_containing(&SALARY_FRAGMENTS)
}

/// Stable descending sort of `rows` by the cell at `col`.
///
/// Numeric cells order by value, largest first. Non-numeric cells sink
/// below all numeric ones and keep their relative input order.
pub fn sort_rows_desc(rows: &mut [Vec<String>], col: usize) {
    rows.sort_by(|a, b| {
        let ka = a.get(col).map(String::as_str).and_then(coerce_numeric);
        let kb = b.get(col).map(String::as_str).and_then(coerce_numeric);
        match (ka, kb) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
