//! CSV export from the TUI.
//!
//! Each view exports under a fixed file name; the content is the
//! post-filter, post-sort table currently on screen.

use crate::model::{DatasetKind, Table};
use crate::reports::write_csv_file;
use std::path::{Path, PathBuf};

/// Result of an export operation.
#[derive(Debug)]
pub struct ExportResult {
    pub path: PathBuf,
    pub success: bool,
    pub message: String,
}

/// Export the current view of one dataset to its fixed file name.
pub fn export_view(table: &Table, kind: DatasetKind, out_dir: &Path) -> ExportResult {
    let path = out_dir.join(kind.export_file_name());
    match write_csv_file(table, &path) {
        Ok(()) => ExportResult {
            message: format!("Exported to {}", path.display()),
            success: true,
            path,
        },
        Err(e) => ExportResult {
            message: format!("Export failed: {e}"),
            success: false,
            path,
        },
    }
}
