//! Dataset loading.
//!
//! The loader reads delimited tabular files into [`Table`]s. Its contract
//! is deliberately forgiving: a missing file or a failed parse yields
//! [`DatasetState::Absent`] and a `warn` log line — callers never see an
//! error and never see a partially-parsed table.

use crate::error::LoadErrorKind;
use crate::model::{Dashboard, DatasetKind, DatasetState, Table};
use std::io::Read;
use std::path::Path;

/// Load one dataset, absorbing every failure into `Absent`.
#[must_use]
pub fn try_load(path: &Path) -> DatasetState {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "dataset file not found");
        return DatasetState::Absent;
    }

    match read_table_file(path) {
        Ok(table) => DatasetState::Present(table),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "dataset unparsable, treating as absent");
            DatasetState::Absent
        }
    }
}

/// Load all four datasets from a data directory.
#[must_use]
pub fn load_dashboard(data_dir: &Path) -> Dashboard {
    Dashboard {
        recruitment: try_load(&data_dir.join(DatasetKind::Recruitment.file_name())),
        managers: try_load(&data_dir.join(DatasetKind::Managers.file_name())),
        turnover: try_load(&data_dir.join(DatasetKind::Turnover.file_name())),
        salary: try_load(&data_dir.join(DatasetKind::Salary.file_name())),
    }
}

/// Decode a CSV file into a table. Internal: failures are typed here and
/// absorbed by [`try_load`].
fn read_table_file(path: &Path) -> Result<Table, LoadErrorKind> {
    let file = std::fs::File::open(path).map_err(|e| LoadErrorKind::Io(e.to_string()))?;
    read_table(file)
}

/// Decode CSV content from any reader.
pub(crate) fn read_table<R: Read>(reader: R) -> Result<Table, LoadErrorKind> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| LoadErrorKind::Csv {
            record: 0,
            message: e.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadErrorKind::MissingHeader);
    }

    let mut rows = Vec::new();
    for (record_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| LoadErrorKind::Csv {
            record: record_num + 2,
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}
