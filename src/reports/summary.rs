//! Dataset summary counters as text or JSON.

use crate::error::{ReportErrorKind, Result, WorkboardError};
use crate::model::{Dashboard, DatasetKind};
use serde::Serialize;

/// One summary counter. `value` is `None` when the dataset is absent.
#[derive(Debug, Clone, Serialize)]
pub struct Counter {
    pub label: &'static str,
    pub value: Option<usize>,
}

/// The summary report payload.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub generated_at: chrono::DateTime<chrono::Local>,
    pub counters: Vec<Counter>,
}

impl SummaryReport {
    /// Build the four counters from one load cycle.
    #[must_use]
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let counters = DatasetKind::ALL
            .iter()
            .map(|&kind| Counter {
                label: kind.counter_label(),
                value: dashboard.counter(kind),
            })
            .collect();
        Self {
            generated_at: chrono::Local::now(),
            counters,
        }
    }

    /// Aligned plain-text rendering.
    #[must_use]
    pub fn to_text(&self) -> String {
        let width = self
            .counters
            .iter()
            .map(|c| c.label.len())
            .max()
            .unwrap_or(0);

        let mut out = format!(
            "Workforce governance summary ({})\n",
            self.generated_at.format("%Y-%m-%d %H:%M")
        );
        for counter in &self.counters {
            let value = counter
                .value
                .map_or_else(|| "N/A".to_string(), |v| v.to_string());
            out.push_str(&format!("  {:width$}  {}\n", counter.label, value));
        }
        out
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WorkboardError::Report {
            context: "summary".to_string(),
            source: ReportErrorKind::JsonSerializationError(e.to_string()),
        })
    }
}
