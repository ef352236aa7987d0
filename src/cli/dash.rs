//! Dash command handler: run the interactive TUI.

use crate::config::DashConfig;
use crate::tui::{run_dash_tui, DashApp};
use anyhow::{Context, Result};

/// Run the `dash` command.
pub fn run_dash(config: DashConfig) -> Result<i32> {
    tracing::debug!(data_dir = %config.data_dir.display(), "starting dashboard");

    let mut app = DashApp::new(config.data_dir, config.export_dir);
    run_dash_tui(&mut app).context("terminal UI failed")?;

    Ok(super::exit_codes::SUCCESS)
}
