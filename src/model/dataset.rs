//! Dataset identity and presence.
//!
//! Each render cycle works on up to four datasets. A dataset that is
//! missing or unparsable is [`DatasetState::Absent`] — a first-class state,
//! pattern-matched at every usage site, never an error and never confused
//! with a present-but-empty table.

use super::table::Table;

/// The four datasets of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Recruitment source quality and stability.
    Recruitment,
    /// Manager effectiveness index.
    Managers,
    /// Department turnover and workforce risk.
    Turnover,
    /// Salary grid.
    Salary,
}

impl DatasetKind {
    /// All kinds, in tab order.
    pub const ALL: [Self; 4] = [Self::Recruitment, Self::Managers, Self::Turnover, Self::Salary];

    /// Input file name inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Recruitment => "recruitment_source_summary.csv",
            Self::Managers => "manager_summary.csv",
            Self::Turnover => "turnover_by_dept.csv",
            Self::Salary => "salary_grid.csv",
        }
    }

    /// Fixed export file name for this view.
    #[must_use]
    pub const fn export_file_name(self) -> &'static str {
        match self {
            Self::Recruitment => "recruitment.csv",
            Self::Managers => "manager_summary.csv",
            Self::Turnover => "turnover.csv",
            Self::Salary => "salary_grid.csv",
        }
    }

    /// The categorical column that drives the filter multiselect.
    /// The salary grid has no filter column.
    #[must_use]
    pub const fn filter_column(self) -> Option<&'static str> {
        match self {
            Self::Recruitment => Some("employee_source"),
            Self::Managers => Some("manager_name"),
            Self::Turnover => Some("department"),
            Self::Salary => None,
        }
    }

    /// The column charted on the category axis.
    #[must_use]
    pub const fn identity_column(self) -> Option<&'static str> {
        match self {
            Self::Recruitment => Some("employee_source"),
            Self::Managers => Some("manager_name"),
            Self::Turnover => Some("department"),
            Self::Salary => None,
        }
    }

    /// The ratio column that receives risk-band styling, if any.
    #[must_use]
    pub const fn risk_column(self) -> Option<&'static str> {
        match self {
            Self::Recruitment | Self::Managers => Some("retention_rate"),
            Self::Turnover => Some("turnover_rate"),
            Self::Salary => None,
        }
    }

    /// Human-readable view title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Recruitment => "Recruitment Quality",
            Self::Managers => "Manager Effectiveness",
            Self::Turnover => "Department Turnover",
            Self::Salary => "Salary Structure",
        }
    }

    /// Label for the summary counter of this dataset.
    #[must_use]
    pub const fn counter_label(self) -> &'static str {
        match self {
            Self::Recruitment => "Recruitment Sources",
            Self::Managers => "Managers Tracked",
            Self::Turnover => "Departments",
            Self::Salary => "Salary Records",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Presence of one dataset in the current load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetState {
    /// The file parsed cleanly.
    Present(Table),
    /// The file is missing or unparsable.
    Absent,
}

impl DatasetState {
    /// The table, when present.
    #[must_use]
    pub const fn table(&self) -> Option<&Table> {
        match self {
            Self::Present(table) => Some(table),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// One load cycle: the four dataset states.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub recruitment: DatasetState,
    pub managers: DatasetState,
    pub turnover: DatasetState,
    pub salary: DatasetState,
}

impl Default for DatasetState {
    fn default() -> Self {
        Self::Absent
    }
}

impl Dashboard {
    /// The state for a given kind.
    #[must_use]
    pub const fn state(&self, kind: DatasetKind) -> &DatasetState {
        match kind {
            DatasetKind::Recruitment => &self.recruitment,
            DatasetKind::Managers => &self.managers,
            DatasetKind::Turnover => &self.turnover,
            DatasetKind::Salary => &self.salary,
        }
    }

    /// True when no dataset loaded at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.recruitment.is_present()
            && !self.managers.is_present()
            && !self.turnover.is_present()
            && !self.salary.is_present()
    }

    /// Summary counter for a kind: row counts for recruitment, managers and
    /// salary; distinct-department count for turnover. `None` when the
    /// dataset is absent (rendered as "N/A").
    #[must_use]
    pub fn counter(&self, kind: DatasetKind) -> Option<usize> {
        let table = self.state(kind).table()?;
        match kind {
            DatasetKind::Turnover => Some(table.distinct_count("department")),
            _ => Some(table.row_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept_table() -> Table {
        Table::new(
            vec!["department".into(), "turnover_rate".into()],
            vec![
                vec!["Sales".into(), "0.41".into()],
                vec!["Sales".into(), "0.30".into()],
                vec!["Engineering".into(), "0.12".into()],
            ],
        )
    }

    #[test]
    fn test_absent_is_default() {
        let dash = Dashboard::default();
        assert!(dash.is_empty());
        assert_eq!(dash.counter(DatasetKind::Recruitment), None);
    }

    #[test]
    fn test_turnover_counter_is_distinct_departments() {
        let dash = Dashboard {
            turnover: DatasetState::Present(dept_table()),
            ..Dashboard::default()
        };
        assert_eq!(dash.counter(DatasetKind::Turnover), Some(2));
        assert!(!dash.is_empty());
    }

    #[test]
    fn test_row_count_counters() {
        let dash = Dashboard {
            recruitment: DatasetState::Present(dept_table()),
            salary: DatasetState::Present(Table::default()),
            ..Dashboard::default()
        };
        assert_eq!(dash.counter(DatasetKind::Recruitment), Some(3));
        // Present with zero rows is distinct from absent
        assert_eq!(dash.counter(DatasetKind::Salary), Some(0));
        assert_eq!(dash.counter(DatasetKind::Managers), None);
    }

    #[test]
    fn test_kind_metadata_is_consistent() {
        for kind in DatasetKind::ALL {
            assert!(kind.file_name().ends_with(".csv"));
            assert!(kind.export_file_name().ends_with(".csv"));
        }
        assert_eq!(DatasetKind::Salary.filter_column(), None);
        assert_eq!(DatasetKind::Salary.risk_column(), None);
    }
}
