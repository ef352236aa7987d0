//! Core data model: tables, dataset identity, and presence.

mod dataset;
mod table;

pub use dataset::{Dashboard, DatasetKind, DatasetState};
pub use table::Table;
