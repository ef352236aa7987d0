//! Centralized color scheme and footer hints for the TUI.

use crate::model::DatasetKind;
use crate::risk::RiskBand;
use ratatui::prelude::*;

/// Semantic colors for the dashboard UI.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Risk band colors
    pub risk_high: Color,
    pub risk_medium: Color,
    pub risk_low: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub background_alt: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground for text on bright backgrounds
    pub badge_fg: Color,
}

const DARK: ColorScheme = ColorScheme {
    risk_high: Color::Red,
    risk_medium: Color::Yellow,
    risk_low: Color::Green,

    primary: Color::Cyan,
    accent: Color::Yellow,
    muted: Color::DarkGray,
    border: Color::DarkGray,
    text: Color::White,
    text_muted: Color::Gray,
    selection: Color::DarkGray,
    background_alt: Color::Rgb(30, 30, 40),

    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,

    badge_fg: Color::Black,
};

/// The active color scheme.
#[must_use]
pub const fn colors() -> &'static ColorScheme {
    &DARK
}

impl ColorScheme {
    /// Color for a risk band; `None` styles nothing.
    #[must_use]
    pub const fn risk_color(&self, band: RiskBand) -> Color {
        match band {
            RiskBand::High => self.risk_high,
            RiskBand::Medium => self.risk_medium,
            RiskBand::Low => self.risk_low,
        }
    }

    /// Bar color for each view's chart, echoing the metric's tone:
    /// cool for quality indices, hot for turnover risk.
    #[must_use]
    pub const fn chart_color(&self, kind: DatasetKind) -> Color {
        match kind {
            DatasetKind::Recruitment => Color::Cyan,
            DatasetKind::Managers => Color::Blue,
            DatasetKind::Turnover => Color::Red,
            DatasetKind::Salary => Color::Green,
        }
    }
}

/// Keyboard hint rows for the footer.
pub struct FooterHints;

impl FooterHints {
    fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "switch view"),
            ("e", "export CSV"),
            ("r", "reload"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }

    /// Hints for the active view.
    #[must_use]
    pub fn for_tab(kind: DatasetKind) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();
        match kind {
            DatasetKind::Recruitment => {
                hints.insert(0, ("f", "filter sources"));
                hints.insert(1, ("s", "sort: Index→Tenure→Perf"));
                hints.insert(2, ("t", "toggle table"));
            }
            DatasetKind::Managers => {
                hints.insert(0, ("f", "filter managers"));
                hints.insert(1, ("t", "toggle table"));
            }
            DatasetKind::Turnover => {
                hints.insert(0, ("f", "filter departments"));
                hints.insert(1, ("t", "toggle table"));
            }
            DatasetKind::Salary => {
                hints.insert(0, ("t", "toggle full grid"));
            }
        }
        hints
    }
}

/// Render hint pairs as footer spans.
#[must_use]
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(colors().accent).bold(),
        ));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(colors().text_muted),
        ));
    }
    spans
}
