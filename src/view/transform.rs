//! The filter → sort → limit pipeline behind every view.
//!
//! Each invocation receives an explicit [`ViewRequest`]; nothing here holds
//! state between calls, and the input table is never mutated.

use super::sort::{salary_sort_column, sort_rows_desc};
use crate::model::{DatasetKind, Table};

/// Number of rows the salary view shows by default.
pub const SALARY_TOP_N: usize = 5;

/// Sort key for a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Sort descending by the named column.
    Column(String),
    /// Detect the first "salary"/"pay" column and sort by its numeric
    /// coercion; load order is kept when no such column exists.
    SalaryColumn,
}

/// Selectable sort options for the recruitment view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecruitmentSort {
    #[default]
    RetentionWeightedIndex,
    MedianTenure,
    AvgPerformance,
}

impl RecruitmentSort {
    /// The column this option sorts by.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::RetentionWeightedIndex => "retention_weighted_index",
            Self::MedianTenure => "median_tenure_years",
            Self::AvgPerformance => "avg_perf",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RetentionWeightedIndex => "Retention-Weighted Index",
            Self::MedianTenure => "Median Tenure",
            Self::AvgPerformance => "Avg Performance",
        }
    }

    /// Cycle to the next option.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::RetentionWeightedIndex => Self::MedianTenure,
            Self::MedianTenure => Self::AvgPerformance,
            Self::AvgPerformance => Self::RetentionWeightedIndex,
        }
    }
}

/// Explicit per-invocation view parameters.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    /// Selected filter values for the kind's filter column. Empty means
    /// "include all rows", never "include none".
    pub selection: Vec<String>,
    /// Active sort key.
    pub sort: SortKey,
}

impl ViewRequest {
    /// The default request for a kind: no filtering, the kind's fixed or
    /// default sort key.
    #[must_use]
    pub fn for_kind(kind: DatasetKind) -> Self {
        Self {
            selection: Vec::new(),
            sort: default_sort_key(kind),
        }
    }

    /// Same request with a selection applied.
    #[must_use]
    pub fn with_selection(mut self, selection: Vec<String>) -> Self {
        self.selection = selection;
        self
    }
}

/// The sort key each view starts with.
#[must_use]
pub fn default_sort_key(kind: DatasetKind) -> SortKey {
    match kind {
        DatasetKind::Recruitment => {
            SortKey::Column(RecruitmentSort::default().column().to_string())
        }
        DatasetKind::Managers => SortKey::Column("mei".to_string()),
        DatasetKind::Turnover => SortKey::Column("turnover_rate".to_string()),
        DatasetKind::Salary => SortKey::SalaryColumn,
    }
}

/// Apply the request's filter and sort to a loaded table, producing the
/// table the view displays and the export serializes.
#[must_use]
pub fn transform(table: &Table, kind: DatasetKind, request: &ViewRequest) -> Table {
    let mut rows: Vec<Vec<String>> = match kind.filter_column() {
        Some(column) if !request.selection.is_empty() => {
            let col = table.column_index(column);
            table
                .rows
                .iter()
                .filter(|row| {
                    col.and_then(|c| row.get(c))
                        .is_some_and(|cell| request.selection.iter().any(|s| s == cell))
                })
                .cloned()
                .collect()
        }
        _ => table.rows.clone(),
    };

    let sort_col = match &request.sort {
        SortKey::Column(name) => table.column_index(name),
        SortKey::SalaryColumn => salary_sort_column(table),
    };
    if let Some(col) = sort_col {
        sort_rows_desc(&mut rows, col);
    }

    Table::new(table.headers.clone(), rows)
}
