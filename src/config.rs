//! Configuration structs threaded from the CLI into command handlers.
//!
//! There is no config-file layer: the only configuration surface is CLI
//! flags and environment variables, and all state is per-invocation.

use crate::model::DatasetKind;
use crate::view::RecruitmentSort;
use std::path::PathBuf;

/// Default data directory holding the four input CSVs.
pub const DEFAULT_DATA_DIR: &str = "output";

/// Configuration for the interactive dashboard.
#[derive(Debug, Clone)]
pub struct DashConfig {
    /// Directory with the input datasets.
    pub data_dir: PathBuf,
    /// Directory exports are written to.
    pub export_dir: PathBuf,
}

/// Configuration for the non-interactive `export` command.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Restrict the export to one view; `None` exports every present one.
    pub tab: Option<DatasetKind>,
    /// Filter selections, matched against each view's filter column.
    pub sources: Vec<String>,
    pub managers: Vec<String>,
    pub departments: Vec<String>,
    /// Recruitment sort choice.
    pub recruitment_sort: RecruitmentSort,
}

/// Output format for the `summary` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for the `summary` command.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub data_dir: PathBuf,
    pub format: SummaryFormat,
}

/// Parse a view name given on the command line.
pub fn parse_dataset_kind(s: &str) -> Result<DatasetKind, String> {
    match s.to_lowercase().as_str() {
        "recruitment" | "sources" => Ok(DatasetKind::Recruitment),
        "managers" | "manager" => Ok(DatasetKind::Managers),
        "turnover" | "departments" => Ok(DatasetKind::Turnover),
        "salary" | "salaries" => Ok(DatasetKind::Salary),
        other => Err(format!(
            "unknown view '{other}' (expected recruitment, managers, turnover or salary)"
        )),
    }
}

/// Parse a recruitment sort key given on the command line.
pub fn parse_recruitment_sort(s: &str) -> Result<RecruitmentSort, String> {
    match s.to_lowercase().as_str() {
        "index" | "retention_weighted_index" => Ok(RecruitmentSort::RetentionWeightedIndex),
        "tenure" | "median_tenure_years" => Ok(RecruitmentSort::MedianTenure),
        "perf" | "performance" | "avg_perf" => Ok(RecruitmentSort::AvgPerformance),
        other => Err(format!(
            "unknown sort key '{other}' (expected index, tenure or perf)"
        )),
    }
}
