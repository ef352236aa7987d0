//! Export command handler.
//!
//! Writes the per-view CSV exports non-interactively, applying the same
//! filter and sort parameters the TUI would.

use crate::config::ExportConfig;
use crate::loader::load_dashboard;
use crate::model::DatasetKind;
use crate::reports::write_csv_file;
use crate::view::{transform, SortKey, ViewRequest};
use anyhow::{Context, Result};

/// Run the `export` command.
pub fn run_export(config: ExportConfig) -> Result<i32> {
    let dashboard = load_dashboard(&config.data_dir);
    if dashboard.is_empty() {
        eprintln!(
            "No datasets found under {}",
            config.data_dir.display()
        );
        return Ok(super::exit_codes::NO_DATA);
    }

    let kinds: Vec<DatasetKind> = match config.tab {
        Some(kind) => vec![kind],
        None => DatasetKind::ALL.to_vec(),
    };

    let mut written = 0usize;
    for kind in kinds {
        let Some(table) = dashboard.state(kind).table() else {
            tracing::info!(view = %kind, "dataset absent, skipping export");
            continue;
        };

        let request = request_for(&config, kind);
        let view = transform(table, kind, &request);
        let path = config.out_dir.join(kind.export_file_name());
        write_csv_file(&view, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} ({} rows)", path.display(), view.row_count());
        written += 1;
    }

    if written == 0 {
        return Ok(super::exit_codes::NO_DATA);
    }
    Ok(super::exit_codes::SUCCESS)
}

/// Build the view request for one kind from CLI parameters. An empty
/// selection means no filtering.
fn request_for(config: &ExportConfig, kind: DatasetKind) -> ViewRequest {
    let selection = match kind {
        DatasetKind::Recruitment => config.sources.clone(),
        DatasetKind::Managers => config.managers.clone(),
        DatasetKind::Turnover => config.departments.clone(),
        DatasetKind::Salary => Vec::new(),
    };
    let sort = match kind {
        DatasetKind::Recruitment => SortKey::Column(config.recruitment_sort.column().to_string()),
        _ => crate::view::default_sort_key(kind),
    };
    ViewRequest { selection, sort }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecruitmentSort;
    use std::path::Path;

    fn config(data_dir: &Path, out_dir: &Path) -> ExportConfig {
        ExportConfig {
            data_dir: data_dir.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
            tab: None,
            sources: Vec::new(),
            managers: Vec::new(),
            departments: Vec::new(),
            recruitment_sort: RecruitmentSort::default(),
        }
    }

    #[test]
    fn test_export_empty_directory_returns_no_data() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let code = run_export(config(data.path(), out.path())).unwrap();
        assert_eq!(code, super::super::exit_codes::NO_DATA);
    }

    #[test]
    fn test_export_writes_present_views_only() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(
            data.path().join("turnover_by_dept.csv"),
            "department,turnover_rate\nEngineering,0.12\nSales,0.41\n",
        )
        .unwrap();

        let code = run_export(config(data.path(), out.path())).unwrap();
        assert_eq!(code, super::super::exit_codes::SUCCESS);

        let exported = std::fs::read_to_string(out.path().join("turnover.csv")).unwrap();
        // sorted descending by turnover_rate
        assert_eq!(
            exported,
            "department,turnover_rate\nSales,0.41\nEngineering,0.12\n"
        );
        assert!(!out.path().join("recruitment.csv").exists());
    }

    #[test]
    fn test_export_applies_department_filter() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(
            data.path().join("turnover_by_dept.csv"),
            "department,turnover_rate\nEngineering,0.12\nSales,0.41\n",
        )
        .unwrap();

        let mut cfg = config(data.path(), out.path());
        cfg.departments = vec!["Engineering".into()];
        run_export(cfg).unwrap();

        let exported = std::fs::read_to_string(out.path().join("turnover.csv")).unwrap();
        assert_eq!(exported, "department,turnover_rate\nEngineering,0.12\n");
    }
}
