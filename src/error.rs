//! Unified error types for workboard.
//!
//! Dataset unavailability is deliberately NOT an error: the loader absorbs
//! it into [`crate::model::DatasetState::Absent`]. The types here cover the
//! remaining failure surface: report generation and file output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for workboard operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WorkboardError {
    /// Errors while decoding an input dataset. These never escape the
    /// loader boundary; `try_load` converts them into an absent dataset.
    #[error("Failed to load dataset: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during report/export generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("File not found")]
    NotFound,

    #[error("CSV decode error at record {record}: {message}")]
    Csv { record: usize, message: String },

    #[error("Header row is missing or empty")]
    MissingHeader,

    #[error("IO error: {0}")]
    Io(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

impl WorkboardError {
    /// Build an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }
}

/// Convenient Result alias for workboard operations.
pub type Result<T> = std::result::Result<T, WorkboardError>;
