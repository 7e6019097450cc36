//! Tooltip bubble over a label

use crate::assistant::palette::{tooltip_foreground, TOOLTIP_BACKGROUND};
use crate::state::ScreenLayout;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Clear, Paragraph},
    Frame,
};

/// Render `text` above `label`, blended toward the background by `opacity`
pub fn render_tooltip(frame: &mut Frame, label: Rect, text: &str, opacity: f32) {
    let width = text.chars().count() as u16;
    let area = ScreenLayout::tooltip(label, width, frame.area());
    if area.is_empty() {
        return;
    }

    let style = Style::default()
        .fg(tooltip_foreground(opacity))
        .bg(TOOLTIP_BACKGROUND);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(format!(" {text} ")).style(style), area);
}
