//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::{App, Focus};
use components::{render_button, render_estimate_panel, render_notification, render_tooltip};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = app.layout_in(area);
    let form = app.assistant.form();

    layout::draw_header(frame, screen.header);
    forms::draw_carbon_form(frame, &screen, app);

    if let Some(display) = &form.estimate_display {
        render_estimate_panel(frame, screen.estimate, display);
    }
    render_button(
        frame,
        screen.submit,
        &form.submit.text,
        app.focus == Focus::Submit,
        !form.submit.disabled,
    );

    layout::draw_status_bar(frame, screen.status, app);

    // Overlays last so they sit on top
    for (label_for, tooltip) in app.assistant.registry().tooltips() {
        let label_area = screen
            .rows
            .iter()
            .find(|r| app.rows.get(r.index).is_some_and(|row| &row.label_for == label_for))
            .map(|r| r.label);
        if let (Some(label_area), Some(opacity)) =
            (label_area, app.assistant.tooltip_opacity(label_for))
        {
            render_tooltip(frame, label_area, &tooltip.text, opacity);
        }
    }

    if let Some(notification) = app.assistant.registry().notification() {
        render_notification(frame, area, notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::test_support::assistant;
    use crate::assistant::FormEvent;
    use crate::state::carbon_calculator;
    use ratatui::{backend::TestBackend, Terminal};

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect()
    }

    #[test]
    fn test_tooltip_on_narrow_terminal_stays_on_screen() {
        let mut app = App::new(assistant(carbon_calculator()));
        app.assistant.dispatch(FormEvent::PointerEntered {
            label_for: "Diet".to_string(),
        });

        let mut terminal = Terminal::new(TestBackend::new(56, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        assert!(row_text(&terminal, 13).contains("Your dietary choices"));
    }

    #[test]
    fn test_notification_on_short_terminal_is_clipped() {
        let mut app = App::new(assistant(carbon_calculator()));
        app.assistant.dispatch(FormEvent::FormSubmitted);
        assert!(app.assistant.registry().notification().is_some());

        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(row_text(&terminal, 1).starts_with('┌'));
    }
}
