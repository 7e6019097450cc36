//! Quick estimate panel

use crate::state::EstimateDisplay;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_estimate_panel(frame: &mut Frame, area: Rect, display: &EstimateDisplay) {
    let value = if display.text.is_empty() {
        Span::styled("--", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            format!("{} kg CO2/yr", display.text),
            Style::default()
                .fg(display.color.unwrap_or(Color::White))
                .add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(value),
        Line::from(Span::styled(
            "rough guide only",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Quick Estimate ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
