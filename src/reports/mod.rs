//! Report and export generators.
//!
//! Exports reflect the post-filter, post-sort view, never the raw load.

pub mod csv;
pub mod summary;

pub use csv::{table_to_csv, write_csv_file};
pub use summary::{Counter, SummaryReport};
