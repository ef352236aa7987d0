//! Filter option derivation.
//!
//! Options are rebuilt from the loaded dataset on every cycle, so the
//! selectable values always mirror the current file contents. Insertion
//! order (first appearance in the file) is kept so the list is stable
//! within and across renders of the same load.

use crate::model::Table;
use indexmap::IndexSet;

/// Distinct non-empty values of `column`, in first-appearance order.
///
/// A column the table does not have yields the empty set; callers treat
/// that the same as a dataset with nothing to filter on.
#[must_use]
pub fn filter_options(table: &Table, column: &str) -> IndexSet<String> {
    let mut options = IndexSet::new();
    for value in table.column_values(column) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            options.insert(trimmed.to_string());
        }
    }
    options
}
