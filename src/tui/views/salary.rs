//! Salary structure view.
//!
//! No chart here: the grid's columns are arbitrary, so the view leads with
//! the top five bands of the descending salary sort and optionally the
//! full grid.

use super::render_detail_table;
use crate::model::DatasetKind;
use crate::tui::app::DashApp;
use crate::tui::widgets::render_absent;
use crate::view::SALARY_TOP_N;
use ratatui::prelude::*;

pub(crate) fn render_salary(frame: &mut Frame, area: Rect, app: &DashApp) {
    let kind = DatasetKind::Salary;
    let Some(view) = app.current_view(kind) else {
        render_absent(frame, area, kind.title());
        return;
    };

    if app.salary.show_table {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        render_detail_table(
            frame,
            chunks[0],
            &view.head(SALARY_TOP_N),
            kind,
            "Salary Grid — Top 5 Highest Bands",
        );
        render_detail_table(frame, chunks[1], &view, kind, "Full Salary Grid");
    } else {
        render_detail_table(
            frame,
            area,
            &view.head(SALARY_TOP_N),
            kind,
            "Salary Grid — Top 5 Highest Bands",
        );
    }
}
