//! Summary command handler.

use crate::config::{SummaryConfig, SummaryFormat};
use crate::loader::load_dashboard;
use crate::reports::SummaryReport;
use anyhow::Result;

/// Run the `summary` command.
pub fn run_summary(config: SummaryConfig) -> Result<i32> {
    let dashboard = load_dashboard(&config.data_dir);
    let report = SummaryReport::from_dashboard(&dashboard);

    match config.format {
        SummaryFormat::Text => print!("{}", report.to_text()),
        SummaryFormat::Json => println!("{}", report.to_json()?),
    }

    if dashboard.is_empty() {
        return Ok(super::exit_codes::NO_DATA);
    }
    Ok(super::exit_codes::SUCCESS)
}
