//! Interactive terminal dashboard using ratatui.
//!
//! The TUI is a thin shell over the pure view pipeline: it holds widget
//! selections, turns them into a [`crate::view::ViewRequest`] per tab, and
//! renders whatever the transforms return. An absent dataset renders a
//! placeholder section and an "N/A" counter, never an error.

mod app;
mod events;
pub(crate) mod export;
pub mod theme;
mod ui;
mod views;
pub(crate) mod widgets;

pub use app::DashApp;
pub use events::Event;
pub use export::{export_view, ExportResult};
pub use theme::{colors, ColorScheme, FooterHints};
pub use ui::run_dash_tui;
