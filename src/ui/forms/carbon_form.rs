//! Calculator form rendering

use super::field_renderer::{draw_error, draw_field, draw_label, draw_options};
use crate::app::{App, Focus};
use crate::state::ScreenLayout;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the bordered form block and every visible row
pub fn draw_carbon_form(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let form_focused = matches!(app.focus, Focus::Row(_));
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let position = format!(
        " {}-{} of {} ",
        (app.scroll_offset + 1).min(app.rows.len()),
        (app.scroll_offset + layout.rows.len()).min(app.rows.len()),
        app.rows.len()
    );
    let block = Block::default()
        .title(" Your Lifestyle ")
        .title_bottom(position)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, layout.form);

    let registry = app.assistant.registry();

    for area in &layout.rows {
        let Some(row) = app.rows.get(area.index) else {
            continue;
        };
        let fields = app.row_fields(area.index);
        let Some(first) = fields.first() else {
            continue;
        };
        let is_active = app.focus == Focus::Row(area.index);
        let is_hovered = app.hovered_label.as_deref() == Some(row.label_for.as_str());

        draw_label(frame, area.label, &row.label, first.required, is_hovered);

        if first.is_checkable() {
            let cursor = is_active.then_some(app.option_cursor);
            draw_options(
                frame,
                area.body,
                &fields,
                &App::option_widths(&fields),
                cursor,
            );
        } else {
            draw_field(frame, area.body, first, is_active);
        }

        draw_error(frame, area.error, registry.error(&first.id));
    }
}
