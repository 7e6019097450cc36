//! Field rendering utilities for forms

use crate::assistant::{palette, ErrorMessage};
use crate::state::{format_number, option_areas, FieldKind, FieldStatus, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border color: validation state wins over focus
fn border_color(status: FieldStatus, is_active: bool) -> Color {
    match status {
        FieldStatus::Valid => palette::VALID_GREEN,
        FieldStatus::Invalid => palette::INVALID_RED,
        FieldStatus::Neutral if is_active => Color::Cyan,
        FieldStatus::Neutral => Color::DarkGray,
    }
}

/// Draw the label line; hovered labels are underlined
pub fn draw_label(frame: &mut Frame, area: Rect, text: &str, required: bool, is_hovered: bool) {
    let mut style = Style::default().fg(Color::Gray);
    if is_hovered {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let mut spans = vec![Span::styled(text.to_string(), style)];
    if required {
        spans.push(Span::styled(" *", Style::default().fg(palette::INVALID_RED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw a text, number or select field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let mut spans = vec![Span::styled(display_str, style)];
    if is_active {
        let hint = match field.kind {
            FieldKind::Select => "  ◀ ▶",
            _ => "▌",
        };
        spans.push(Span::styled(hint, Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field.status, is_active)));
    if let (Some(min), Some(max)) = (field.min, field.max) {
        block = block.title(format!(" {}..{} ", format_number(min), format_number(max)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a checkbox or radio group on one line, highlighting the cursor option
pub fn draw_options(
    frame: &mut Frame,
    area: Rect,
    fields: &[&FormField],
    widths: &[u16],
    cursor: Option<usize>,
) {
    let is_active = cursor.is_some();
    let status = fields.first().map(|f| f.status).unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(status, is_active)));
    frame.render_widget(block, area);

    for (i, (field, option_area)) in fields
        .iter()
        .zip(option_areas(area, widths))
        .enumerate()
    {
        let mut style = if field.checked {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        if cursor == Some(i) {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        frame.render_widget(
            Paragraph::new(field.display_value()).style(style),
            option_area,
        );
    }
}

/// Draw the inline error under a field, or nothing
pub fn draw_error(frame: &mut Frame, area: Rect, error: Option<&ErrorMessage>) {
    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(error.text.as_str()).style(Style::default().fg(palette::INVALID_RED)),
            area,
        );
    }
}
