//! CSV serialization of a view.
//!
//! The export is a byte-exact image of the currently displayed table:
//! header row first, comma-delimited, RFC 4180 quoting, no index column.

use crate::error::{Result, WorkboardError};
use crate::model::Table;
use std::io::Write;
use std::path::Path;

/// Serialize a table to CSV text.
#[must_use]
pub fn table_to_csv(table: &Table) -> String {
    let mut content = String::new();
    write_record(&mut content, &table.headers);
    for row in &table.rows {
        write_record(&mut content, row);
    }
    content
}

/// Write one export file. The parent directory must exist.
pub fn write_csv_file(table: &Table, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path).map_err(|e| WorkboardError::io(path, e))?;
    file.write_all(table_to_csv(table).as_bytes())
        .map_err(|e| WorkboardError::io(path, e))
}

fn write_record(content: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            content.push(',');
        }
        content.push_str(&escape_csv(cell));
    }
    content.push('\n');
}

/// Quote a field only when it needs it: embedded commas, quotes or
/// newlines, per RFC 4180 minimal quoting.
fn escape_csv(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
