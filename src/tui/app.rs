//! `DashApp` - application state for the dashboard TUI.
//!
//! The app holds the user's widget selections (active tab, filter
//! selections, sort choice, table toggles) and the most recent load cycle.
//! Every state-changing interaction reloads the datasets from disk and the
//! view tables are recomputed from pure transforms on each render; nothing
//! is cached across interactions.

use crate::loader::load_dashboard;
use crate::model::{Dashboard, DatasetKind, Table};
use crate::view::{
    default_sort_key, filter_options, transform, RecruitmentSort, SortKey, ViewRequest,
};
use std::path::PathBuf;

/// Per-view UI state.
#[derive(Debug, Clone, Default)]
pub(crate) struct TabUiState {
    /// Active filter values; empty means no filtering.
    pub selection: Vec<String>,
    /// Whether the detail table is shown under the chart.
    pub show_table: bool,
}

/// State of the filter multiselect overlay.
#[derive(Debug, Clone)]
pub(crate) struct FilterOverlay {
    pub kind: DatasetKind,
    /// Options derived from the current load, first-appearance order.
    pub options: Vec<String>,
    pub cursor: usize,
}

/// Main application state for the dashboard TUI.
pub struct DashApp {
    pub(crate) data_dir: PathBuf,
    pub(crate) export_dir: PathBuf,

    /// The current load cycle.
    pub(crate) dashboard: Dashboard,

    /// Current active view.
    pub(crate) active_tab: DatasetKind,

    /// Selected recruitment sort option.
    pub(crate) recruitment_sort: RecruitmentSort,

    pub(crate) recruitment: TabUiState,
    pub(crate) managers: TabUiState,
    pub(crate) turnover: TabUiState,
    pub(crate) salary: TabUiState,

    /// Open filter multiselect, if any.
    pub(crate) filter_overlay: Option<FilterOverlay>,

    /// Show help overlay.
    pub(crate) show_help: bool,

    /// Status message to display temporarily.
    pub(crate) status_message: Option<String>,

    /// Should quit.
    pub(crate) should_quit: bool,

    /// Animation tick counter.
    pub(crate) tick: u64,
}

impl DashApp {
    /// Create the app and run the first load cycle.
    #[must_use]
    pub fn new(data_dir: PathBuf, export_dir: PathBuf) -> Self {
        let dashboard = load_dashboard(&data_dir);
        Self {
            data_dir,
            export_dir,
            dashboard,
            active_tab: DatasetKind::Recruitment,
            recruitment_sort: RecruitmentSort::default(),
            recruitment: TabUiState::default(),
            managers: TabUiState::default(),
            turnover: TabUiState::default(),
            salary: TabUiState::default(),
            filter_overlay: None,
            show_help: false,
            status_message: None,
            should_quit: false,
            tick: 0,
        }
    }

    /// Reload all datasets from disk and drop filter selections that no
    /// longer appear in the loaded data.
    pub fn reload(&mut self) {
        self.dashboard = load_dashboard(&self.data_dir);
        for kind in DatasetKind::ALL {
            let valid: Vec<String> = match (self.dashboard.state(kind).table(), kind.filter_column())
            {
                (Some(table), Some(column)) => {
                    let options = filter_options(table, column);
                    self.tab_state(kind)
                        .selection
                        .iter()
                        .filter(|v| options.contains(v.as_str()))
                        .cloned()
                        .collect()
                }
                _ => Vec::new(),
            };
            self.tab_state_mut(kind).selection = valid;
        }
    }

    pub(crate) fn tab_state(&self, kind: DatasetKind) -> &TabUiState {
        match kind {
            DatasetKind::Recruitment => &self.recruitment,
            DatasetKind::Managers => &self.managers,
            DatasetKind::Turnover => &self.turnover,
            DatasetKind::Salary => &self.salary,
        }
    }

    pub(crate) fn tab_state_mut(&mut self, kind: DatasetKind) -> &mut TabUiState {
        match kind {
            DatasetKind::Recruitment => &mut self.recruitment,
            DatasetKind::Managers => &mut self.managers,
            DatasetKind::Turnover => &mut self.turnover,
            DatasetKind::Salary => &mut self.salary,
        }
    }

    /// Switch to the next tab.
    pub const fn next_tab(&mut self) {
        self.active_tab = match self.active_tab {
            DatasetKind::Recruitment => DatasetKind::Managers,
            DatasetKind::Managers => DatasetKind::Turnover,
            DatasetKind::Turnover => DatasetKind::Salary,
            DatasetKind::Salary => DatasetKind::Recruitment,
        };
    }

    /// Switch to the previous tab.
    pub const fn prev_tab(&mut self) {
        self.active_tab = match self.active_tab {
            DatasetKind::Recruitment => DatasetKind::Salary,
            DatasetKind::Managers => DatasetKind::Recruitment,
            DatasetKind::Turnover => DatasetKind::Managers,
            DatasetKind::Salary => DatasetKind::Turnover,
        };
    }

    /// Select a specific tab.
    pub const fn select_tab(&mut self, kind: DatasetKind) {
        self.active_tab = kind;
    }

    /// The view parameters for one tab, built from current widget state.
    #[must_use]
    pub fn request_for(&self, kind: DatasetKind) -> ViewRequest {
        let sort = match kind {
            DatasetKind::Recruitment => {
                SortKey::Column(self.recruitment_sort.column().to_string())
            }
            _ => default_sort_key(kind),
        };
        ViewRequest {
            selection: self.tab_state(kind).selection.clone(),
            sort,
        }
    }

    /// The filtered/sorted table a tab displays and exports, when the
    /// dataset is present.
    #[must_use]
    pub fn current_view(&self, kind: DatasetKind) -> Option<Table> {
        let table = self.dashboard.state(kind).table()?;
        Some(transform(table, kind, &self.request_for(kind)))
    }

    /// The column charted as the bar value for a tab.
    #[must_use]
    pub fn chart_value_column(&self, kind: DatasetKind) -> Option<&'static str> {
        match kind {
            DatasetKind::Recruitment => Some(self.recruitment_sort.column()),
            DatasetKind::Managers => Some("mei"),
            DatasetKind::Turnover => Some("turnover_rate"),
            DatasetKind::Salary => None,
        }
    }

    /// Cycle the recruitment sort option (active on that tab only).
    pub fn cycle_sort(&mut self) {
        if self.active_tab == DatasetKind::Recruitment {
            self.recruitment_sort = self.recruitment_sort.next();
            self.reload();
        }
    }

    /// Toggle the detail table for the active tab.
    pub fn toggle_table(&mut self) {
        let kind = self.active_tab;
        self.tab_state_mut(kind).show_table = !self.tab_state(kind).show_table;
        self.reload();
    }

    /// Open the filter multiselect for the active tab, when it has a
    /// filter column and a present dataset.
    pub fn open_filter_overlay(&mut self) {
        let kind = self.active_tab;
        let Some(column) = kind.filter_column() else {
            return;
        };
        let Some(table) = self.dashboard.state(kind).table() else {
            self.set_status_message("No dataset to filter");
            return;
        };
        let options: Vec<String> = filter_options(table, column).into_iter().collect();
        if options.is_empty() {
            self.set_status_message("No filter values available");
            return;
        }
        self.filter_overlay = Some(FilterOverlay {
            kind,
            options,
            cursor: 0,
        });
    }

    /// Close the filter overlay and re-run the load cycle.
    pub fn close_filter_overlay(&mut self) {
        self.filter_overlay = None;
        self.reload();
    }

    pub fn overlay_cursor_up(&mut self) {
        if let Some(overlay) = &mut self.filter_overlay {
            overlay.cursor = overlay.cursor.saturating_sub(1);
        }
    }

    pub fn overlay_cursor_down(&mut self) {
        if let Some(overlay) = &mut self.filter_overlay {
            if overlay.cursor + 1 < overlay.options.len() {
                overlay.cursor += 1;
            }
        }
    }

    /// Toggle membership of the option under the cursor.
    pub fn overlay_toggle_selected(&mut self) {
        let Some(overlay) = &self.filter_overlay else {
            return;
        };
        let kind = overlay.kind;
        let Some(value) = overlay.options.get(overlay.cursor).cloned() else {
            return;
        };
        let selection = &mut self.tab_state_mut(kind).selection;
        if let Some(pos) = selection.iter().position(|v| *v == value) {
            selection.remove(pos);
        } else {
            selection.push(value);
        }
    }

    /// Clear the selection for the overlay's tab (back to "all rows").
    pub fn overlay_clear_selection(&mut self) {
        if let Some(overlay) = &self.filter_overlay {
            let kind = overlay.kind;
            self.tab_state_mut(kind).selection.clear();
        }
    }

    /// Export the active tab's current view to its fixed file name.
    pub fn export_active(&mut self) {
        let kind = self.active_tab;
        match self.current_view(kind) {
            Some(view) => {
                let result = super::export::export_view(&view, kind, &self.export_dir);
                self.set_status_message(result.message);
            }
            None => self.set_status_message("No dataset to export"),
        }
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.filter_overlay = None;
        }
    }

    /// Check if any overlay is open.
    #[must_use]
    pub const fn has_overlay(&self) -> bool {
        self.show_help || self.filter_overlay.is_some()
    }

    /// Close all overlays.
    pub fn close_overlays(&mut self) {
        self.show_help = false;
        if self.filter_overlay.is_some() {
            self.close_filter_overlay();
        }
    }

    /// Set a temporary status message.
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear the status message.
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
