//! Per-tab view rendering.

mod managers;
mod recruitment;
mod salary;
mod turnover;

pub(crate) use managers::render_managers;
pub(crate) use recruitment::render_recruitment;
pub(crate) use salary::render_salary;
pub(crate) use turnover::render_turnover;

use super::theme::colors;
use super::widgets::truncate_str;
use crate::model::{DatasetKind, Table};
use crate::risk::risk_band;
use crate::view::coerce_numeric;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table as TableWidget},
};

const BAR_WIDTH: u16 = 9;
const BAR_GAP: u16 = 1;

/// Render the categorical bar chart for a view: identity column on the
/// category axis, the active sort-key column as bar value. Bars are
/// normalized against the column maximum; each bar shows the raw cell text.
pub(crate) fn render_bar_chart(
    frame: &mut Frame,
    area: Rect,
    view: &Table,
    kind: DatasetKind,
    value_column: &str,
    title: &str,
) {
    let scheme = colors();
    let Some(identity_column) = kind.identity_column() else {
        return;
    };

    let label_width = BAR_WIDTH as usize;
    let capacity = (area.width.saturating_sub(2) / (BAR_WIDTH + BAR_GAP)).max(1) as usize;

    let values: Vec<(String, String, Option<f64>)> = view
        .rows
        .iter()
        .take(capacity)
        .map(|row| {
            let identity = view
                .column_index(identity_column)
                .and_then(|c| row.get(c))
                .cloned()
                .unwrap_or_default();
            let raw = view
                .column_index(value_column)
                .and_then(|c| row.get(c))
                .cloned()
                .unwrap_or_default();
            let numeric = coerce_numeric(&raw);
            (identity, raw, numeric)
        })
        .collect();

    let max = values
        .iter()
        .filter_map(|(_, _, n)| *n)
        .fold(0.0_f64, f64::max);

    let bars: Vec<Bar> = values
        .iter()
        .map(|(identity, raw, numeric)| {
            let scaled = match numeric {
                Some(v) if max > 0.0 => ((v / max) * 100.0).round().max(0.0) as u64,
                _ => 0,
            };
            Bar::default()
                .value(scaled)
                .text_value(raw.clone())
                .label(Line::from(truncate_str(identity, label_width)))
                .style(Style::default().fg(scheme.chart_color(kind)))
        })
        .collect();

    let omitted = view.row_count().saturating_sub(values.len());
    let block_title = if omitted > 0 {
        format!(" {title} (+{omitted} more) ")
    } else {
        format!(" {title} ")
    };

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(block_title)
                .title_style(Style::default().fg(scheme.text).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .value_style(Style::default().fg(scheme.text).bold())
        .label_style(Style::default().fg(scheme.text_muted))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Render the detail table for a view, applying risk-band colors to the
/// kind's designated ratio column.
pub(crate) fn render_detail_table(
    frame: &mut Frame,
    area: Rect,
    view: &Table,
    kind: DatasetKind,
    title: &str,
) {
    let scheme = colors();
    let risk_col = kind.risk_column().and_then(|c| view.column_index(c));

    let header_cells = view
        .headers
        .iter()
        .map(|h| Cell::from(h.as_str()).style(Style::default().fg(scheme.accent).bold()));
    let header = Row::new(header_cells).height(1);

    if view.rows.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No rows match the current filter",
            Style::default().fg(scheme.text_muted),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        );
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let cells = row.iter().enumerate().map(|(i, cell)| {
                let style = match risk_col {
                    Some(rc) if rc == i => risk_band(cell).map_or_else(Style::default, |band| {
                        Style::default().fg(scheme.badge_fg).bg(scheme.risk_color(band))
                    }),
                    _ => Style::default().fg(scheme.text),
                };
                Cell::from(cell.as_str()).style(style)
            });
            Row::new(cells).height(1)
        })
        .collect();

    let widths: Vec<Constraint> = view
        .headers
        .iter()
        .map(|_| Constraint::Ratio(1, view.headers.len().max(1) as u32))
        .collect();

    let table = TableWidget::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" {title} ({}) ", view.row_count()))
            .title_style(Style::default().fg(scheme.text).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border)),
    );

    frame.render_widget(table, area);
}

/// Split a tab's content area into chart and optional table halves.
pub(crate) fn chart_table_layout(area: Rect, show_table: bool) -> (Rect, Option<Rect>) {
    if show_table {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    }
}
