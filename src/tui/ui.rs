//! UI rendering and the main loop for the dashboard TUI.

use super::app::DashApp;
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, FooterHints};
use super::views;
use super::widgets::{
    centered_rect, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH,
};
use crate::model::DatasetKind;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use std::io::{self, stdout};

/// Run the dashboard TUI.
pub fn run_dash_tui(app: &mut DashApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => {
                app.tick += 1;
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function.
fn render(frame: &mut Frame, app: &DashApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, tabs, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(3),  // Tabs
            Constraint::Min(10),    // Content
            Constraint::Length(1),  // Status bar
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);

    match app.active_tab {
        DatasetKind::Recruitment => views::render_recruitment(frame, chunks[2], app),
        DatasetKind::Managers => views::render_managers(frame, chunks[2], app),
        DatasetKind::Turnover => views::render_turnover(frame, chunks[2], app),
        DatasetKind::Salary => views::render_salary(frame, chunks[2], app),
    }

    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if let Some(overlay) = &app.filter_overlay {
        render_filter_overlay(frame, area, app, overlay);
    }
    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashApp) {
    let header_line = Line::from(vec![
        Span::styled("workboard", Style::default().fg(colors().primary).bold()),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(
            "Workforce & Quality Governance Dashboard",
            Style::default().fg(colors().text).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(
            app.data_dir.display().to_string(),
            Style::default().fg(colors().text_muted),
        ),
    ]);

    frame.render_widget(Paragraph::new(header_line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &DashApp) {
    let titles: Vec<Line> = DatasetKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let is_active = *kind == app.active_tab;
            let style = if is_active {
                Style::default().fg(colors().accent).bold()
            } else {
                Style::default().fg(colors().text_muted)
            };
            Line::from(vec![
                Span::styled(format!("[{}]", i + 1), style),
                Span::styled(format!(" {} ", kind.title()), style),
            ])
        })
        .collect();

    let selected_idx = DatasetKind::ALL
        .iter()
        .position(|k| *k == app.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors().border)),
        )
        .highlight_style(Style::default().fg(colors().accent))
        .select(selected_idx)
        .divider(Span::styled(" │ ", Style::default().fg(colors().muted)));

    frame.render_widget(tabs, area);
}

/// Status bar: the four summary counters, plus the active filter count.
fn render_status_bar(frame: &mut Frame, area: Rect, app: &DashApp) {
    let mut spans = Vec::new();

    for (i, kind) in DatasetKind::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        }
        spans.push(Span::styled(
            format!("{}: ", kind.counter_label()),
            Style::default().fg(colors().text_muted),
        ));
        match app.dashboard.counter(*kind) {
            Some(count) => spans.push(Span::styled(
                count.to_string(),
                Style::default().fg(colors().primary).bold(),
            )),
            None => spans.push(Span::styled(
                "N/A",
                Style::default().fg(colors().text_muted),
            )),
        }
    }

    let selection = &app.tab_state(app.active_tab).selection;
    if !selection.is_empty() {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled(
            format!(" {} filter{} active ", selection.len(), if selection.len() == 1 { "" } else { "s" }),
            Style::default().fg(colors().badge_fg).bg(colors().accent).bold(),
        ));
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors().background_alt));
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashApp) {
    if let Some(ref msg) = app.status_message {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.as_str(), Style::default().fg(colors().accent).bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let hints = FooterHints::for_tab(app.active_tab);
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().text_muted));

    frame.render_widget(footer, area);
}

fn render_filter_overlay(
    frame: &mut Frame,
    area: Rect,
    app: &DashApp,
    overlay: &super::app::FilterOverlay,
) {
    let popup_area = centered_rect(45, 60, area);
    frame.render_widget(Clear, popup_area);

    let selection = &app.tab_state(overlay.kind).selection;
    let column = overlay.kind.filter_column().unwrap_or("value");

    let mut lines = Vec::new();
    for (i, option) in overlay.options.iter().enumerate() {
        let is_cursor = i == overlay.cursor;
        let is_selected = selection.iter().any(|v| v == option);
        let marker = if is_selected { "[x]" } else { "[ ]" };
        let style = if is_cursor {
            Style::default().bg(colors().selection).bold()
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                if is_cursor { "▶ " } else { "  " },
                Style::default().fg(colors().accent),
            ),
            Span::styled(format!("{marker} "), style.fg(colors().primary)),
            Span::styled(option.clone(), style.fg(colors().text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "[space] toggle  [c] clear  [Enter] apply",
        Style::default().fg(colors().text_muted),
    ));

    let list = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Filter by {column} "))
            .title_style(Style::default().fg(colors().primary).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().primary)),
    );

    frame.render_widget(list, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 65, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ Dashboard Help ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  1-4            ", Style::default().fg(colors().accent)),
            Span::styled(
                "Jump to view (Recruitment/Managers/Turnover/Salary)",
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Tab/Shift+Tab  ", Style::default().fg(colors().accent)),
            Span::styled("Next / previous view", Style::default().fg(colors().text)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "View controls",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  f              ", Style::default().fg(colors().accent)),
            Span::styled(
                "Filter by source / manager / department",
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::styled("  s              ", Style::default().fg(colors().accent)),
            Span::styled(
                "Cycle recruitment sort (Index/Tenure/Performance)",
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::styled("  t              ", Style::default().fg(colors().accent)),
            Span::styled("Toggle the detail table", Style::default().fg(colors().text)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Actions",
            Style::default().fg(colors().primary).bold(),
        )]),
        Line::from(vec![
            Span::styled("  e              ", Style::default().fg(colors().accent)),
            Span::styled(
                "Export the current view as CSV",
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::styled("  r              ", Style::default().fg(colors().accent)),
            Span::styled("Reload datasets from disk", Style::default().fg(colors().text)),
        ]),
        Line::from(vec![
            Span::styled("  q / Esc        ", Style::default().fg(colors().accent)),
            Span::styled("Quit / close overlay", Style::default().fg(colors().text)),
        ]),
        Line::from(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(colors().accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().accent)),
    );

    frame.render_widget(help, popup_area);
}
