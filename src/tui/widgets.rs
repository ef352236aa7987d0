//! Shared rendering helpers.

use super::theme::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::styled(
            format!(
                "Need at least {required_width}x{required_height}, have {}x{}",
                area.width, area.height
            ),
            Style::default().fg(colors().text_muted),
        ),
    ];
    let warning = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(warning, area);
}

/// Centered popup rect sized as a percentage of the parent.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width.
#[must_use]
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    let display_width = UnicodeWidthStr::width(s);
    if display_width <= max_width {
        s.to_string()
    } else if max_width > 1 {
        let mut width = 0;
        let truncated: String = s
            .chars()
            .take_while(|c| {
                width += UnicodeWidthChar::width(*c).unwrap_or(0);
                width <= max_width - 1
            })
            .collect();
        format!("{truncated}…")
    } else {
        "…".to_string()
    }
}

/// Render a bordered "dataset unavailable" placeholder.
pub fn render_absent(frame: &mut Frame, area: Rect, title: &str) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Dataset unavailable",
            Style::default().fg(colors().text_muted).bold(),
        ),
        Line::from(""),
        Line::styled(
            "The source file is missing or could not be parsed.",
            Style::default().fg(colors().text_muted),
        ),
    ];
    let placeholder = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().border)),
    );
    frame.render_widget(placeholder, area);
}
