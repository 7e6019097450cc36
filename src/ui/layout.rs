//! Layout components (header, status bar)

use crate::app::App;
use crate::assistant::palette;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the header with the page title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Carbon Footprint Calculator ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "answer a few lifestyle questions",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", shortcut_hints()),
        Style::default().fg(Color::Gray),
    )];

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        saved_label(app.assistant.last_saved()),
        Style::default().fg(Color::Green),
    ));

    let errors = app.assistant.registry().error_count();
    if errors > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            error_label(errors),
            Style::default().fg(palette::INVALID_RED),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn shortcut_hints() -> String {
    format!("Tab:next  ◀▶:choose  Space:toggle  {SUBMIT_SHORTCUT}:calculate  Esc:dismiss")
}

fn error_label(count: usize) -> String {
    if count == 1 {
        "1 field needs attention".to_string()
    } else {
        format!("{count} fields need attention")
    }
}

/// Autosave indicator text
fn saved_label(last_saved: Option<DateTime<Local>>) -> String {
    match last_saved {
        Some(at) => format!("saved {}", at.format("%H:%M:%S")),
        None => "not saved yet".to_string(),
    }
}
