//! Recruitment source quality view.

use super::{chart_table_layout, render_bar_chart, render_detail_table};
use crate::model::DatasetKind;
use crate::tui::app::DashApp;
use crate::tui::widgets::render_absent;
use ratatui::prelude::*;

pub(crate) fn render_recruitment(frame: &mut Frame, area: Rect, app: &DashApp) {
    let kind = DatasetKind::Recruitment;
    let Some(view) = app.current_view(kind) else {
        render_absent(frame, area, kind.title());
        return;
    };

    let (chart_area, table_area) = chart_table_layout(area, app.recruitment.show_table);
    let title = format!(
        "Recruitment Source Quality — by {}",
        app.recruitment_sort.label()
    );
    render_bar_chart(
        frame,
        chart_area,
        &view,
        kind,
        app.recruitment_sort.column(),
        &title,
    );

    if let Some(table_area) = table_area {
        render_detail_table(frame, table_area, &view, kind, "Recruitment Sources");
    }
}
