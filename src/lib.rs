//! **Workforce governance analytics dashboard.**
//!
//! `workboard` renders four precomputed HR datasets — recruitment-source
//! quality, manager effectiveness, department turnover and salary bands —
//! as filterable, sortable views with bar charts, risk-colored tables and
//! CSV export. All metrics are computed upstream; this crate is strictly a
//! presentation layer over flat CSV files.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the central data types. A [`Table`] is an ordered
//!   header row plus string-cell rows; [`DatasetState`] tags each of the
//!   four datasets as `Present` or `Absent`. A missing or unparsable file
//!   is absent — never an error, and never a partially rendered table.
//! - **[`loader`]**: reads the four CSVs of one load cycle. Every failure
//!   is absorbed into `Absent` at this boundary.
//! - **[`view`]**: the pure filter → sort → limit pipeline. Each call
//!   receives an explicit [`ViewRequest`]; empty selections mean "include
//!   all rows", sorts are stable and descending, and non-numeric sort
//!   cells order after all numeric ones.
//! - **[`risk`]**: bands a ratio cell into low/medium/high severity for
//!   cell-level emphasis.
//! - **[`reports`]**: CSV serialization of the exact current view, plus
//!   the dataset summary counters as text or JSON.
//! - **[`tui`]**: the interactive ratatui dashboard over all of the above.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use workboard::loader::load_dashboard;
//! use workboard::model::DatasetKind;
//! use workboard::view::{transform, ViewRequest};
//!
//! let dashboard = load_dashboard(Path::new("output"));
//! if let Some(table) = dashboard.state(DatasetKind::Turnover).table() {
//!     let request = ViewRequest::for_kind(DatasetKind::Turnover)
//!         .with_selection(vec!["Sales".to_string()]);
//!     let view = transform(table, DatasetKind::Turnover, &request);
//!     println!("{}", workboard::reports::table_to_csv(&view));
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔f64/u64/u16 casts are pervasive in TUI layout math; values are
    // bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // TUI render functions are inherently long
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod reports;
pub mod risk;
pub mod tui;
pub mod view;

// Re-export main types for convenience
pub use config::{DashConfig, ExportConfig, SummaryConfig, SummaryFormat};
pub use error::{Result, WorkboardError};
pub use loader::{load_dashboard, try_load};
pub use model::{Dashboard, DatasetKind, DatasetState, Table};
pub use reports::{table_to_csv, SummaryReport};
pub use risk::{risk_band, RiskBand};
pub use view::{filter_options, transform, RecruitmentSort, SortKey, ViewRequest};
