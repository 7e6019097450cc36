//! Notification toast in the top-right corner

use crate::assistant::Notification;
use crate::state::ScreenLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Close glyph drawn at the toast's right edge
pub const CLOSE_GLYPH: &str = "×";

/// Render the toast over whatever is below it
pub fn render_notification(frame: &mut Frame, screen: Rect, notification: &Notification) {
    let area = ScreenLayout::toast(screen);
    if area.is_empty() {
        return;
    }
    let color = notification.kind.color();

    frame.render_widget(Clear, area);

    // Leave room for " ×" on the right of the inner line
    let text_width = area.width.saturating_sub(5) as usize;
    let message: String = notification.message.chars().take(text_width).collect();
    let padding = text_width.saturating_sub(message.chars().count());

    let line = Line::from(vec![
        Span::styled(message, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding + 1)),
        Span::styled(
            CLOSE_GLYPH,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(color));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
