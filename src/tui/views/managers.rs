//! Manager effectiveness view.

use super::{chart_table_layout, render_bar_chart, render_detail_table};
use crate::model::DatasetKind;
use crate::tui::app::DashApp;
use crate::tui::widgets::render_absent;
use ratatui::prelude::*;

pub(crate) fn render_managers(frame: &mut Frame, area: Rect, app: &DashApp) {
    let kind = DatasetKind::Managers;
    let Some(view) = app.current_view(kind) else {
        render_absent(frame, area, kind.title());
        return;
    };

    let (chart_area, table_area) = chart_table_layout(area, app.managers.show_table);
    render_bar_chart(
        frame,
        chart_area,
        &view,
        kind,
        "mei",
        "Manager Effectiveness Index (MEI)",
    );

    if let Some(table_area) = table_area {
        render_detail_table(frame, table_area, &view, kind, "Manager Performance");
    }
}
