//! Application state and terminal input handling

use crate::assistant::{EventOutcome, FormAssistant, FormEvent, SavedFormState};
use crate::platform;
use crate::state::{option_areas, FieldKind, FormField, FormRow, ScreenLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// How long the loading button stays on screen after a successful submit
const SUBMIT_LINGER: Duration = Duration::from_millis(600);

/// Which part of the screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A form row, by index into [`App::rows`]
    Row(usize),
    Submit,
}

/// Main application struct
pub struct App {
    pub assistant: FormAssistant,
    /// Label rows of the form, fixed for the lifetime of the page
    pub rows: Vec<FormRow>,
    pub focus: Focus,
    /// Selected option within a checkbox or radio row
    pub option_cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Label currently under the pointer
    pub hovered_label: Option<String>,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Payload of a submission that went through
    pub submission: Option<SavedFormState>,
    submitted_at: Option<Duration>,
    /// Field edited since its last change event
    pending_change: Option<String>,
    started: Instant,
    quit: bool,
}

impl App {
    /// Create the app and fire the page's load event
    pub fn new(mut assistant: FormAssistant) -> Self {
        let rows = assistant.form().rows();
        assistant.dispatch(FormEvent::PageLoaded);

        Self {
            assistant,
            rows,
            focus: Focus::Row(0),
            option_cursor: 0,
            scroll_offset: 0,
            hovered_label: None,
            terminal_size: None,
            submission: None,
            submitted_at: None,
            pending_change: None,
            started: Instant::now(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance the assistant's clock to wall time
    pub fn tick(&mut self) {
        self.tick_at(self.started.elapsed());
    }

    pub fn tick_at(&mut self, now: Duration) {
        self.assistant.advance(now);

        if let Some(at) = self.submitted_at {
            if self.assistant.now() >= at + SUBMIT_LINGER {
                self.quit = true;
            }
        }
    }

    /// Whether something on screen is mid-animation
    pub fn is_animating(&self) -> bool {
        let now = self.assistant.now();
        self.submitted_at.is_some()
            || self
                .assistant
                .registry()
                .tooltips()
                .any(|(_, t)| now < t.fade.start + t.fade.duration)
    }

    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Layout of `area` at the current scroll position
    pub fn layout_in(&self, area: Rect) -> ScreenLayout {
        ScreenLayout::compute(area, self.rows.len(), self.scroll_offset)
    }

    fn layout(&self) -> ScreenLayout {
        self.layout_in(self.screen_area())
    }

    /// Fields of a row, in document order
    pub fn row_fields(&self, index: usize) -> Vec<&FormField> {
        self.rows
            .get(index)
            .map(|row| {
                row.fields
                    .iter()
                    .filter_map(|&i| self.assistant.form().fields().get(i))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display widths of a checkable row's options
    pub fn option_widths(fields: &[&FormField]) -> Vec<u16> {
        fields
            .iter()
            .map(|f| f.display_value().chars().count() as u16)
            .collect()
    }

    /// The field keyboard input goes to
    fn focused_field(&self) -> Option<&FormField> {
        let Focus::Row(index) = self.focus else {
            return None;
        };
        let fields = self.row_fields(index);
        let pick = if fields.first().is_some_and(|f| f.is_checkable()) {
            self.option_cursor
        } else {
            0
        };
        fields.get(pick).copied()
    }

    fn focused_id(&self) -> Option<String> {
        self.focused_field().map(|f| f.id.clone())
    }

    fn dispatch(&mut self, event: FormEvent) {
        match self.assistant.dispatch(event) {
            EventOutcome::Submitted(payload) => {
                self.submission = Some(payload);
                self.submitted_at = Some(self.assistant.now());
            }
            EventOutcome::Handled | EventOutcome::DefaultPrevented => {}
        }
    }

    /// Fire the change event for a field edited by typing
    fn commit_change(&mut self) {
        if let Some(field_id) = self.pending_change.take() {
            self.dispatch(FormEvent::FieldChanged { field_id });
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus {
            self.commit_change();
            self.option_cursor = 0;
        }
        self.focus = focus;
        self.ensure_visible();
    }

    /// Move focus forward through the rows and on to the submit button
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Row(i) if i + 1 < self.rows.len() => Focus::Row(i + 1),
            Focus::Row(_) => Focus::Submit,
            Focus::Submit => Focus::Row(0),
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            Focus::Row(0) => Focus::Submit,
            Focus::Row(i) => Focus::Row(i - 1),
            Focus::Submit => Focus::Row(self.rows.len().saturating_sub(1)),
        };
        self.set_focus(prev);
    }

    /// Scroll so the focused row is on screen
    fn ensure_visible(&mut self) {
        let Focus::Row(index) = self.focus else {
            return;
        };
        let visible = self.layout().visible_rows.max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + visible {
            self.scroll_offset = index + 1 - visible;
        }
    }

    fn scroll_by(&mut self, down: bool) {
        let visible = self.layout().visible_rows;
        let max = self.rows.len().saturating_sub(visible);
        self.scroll_offset = if down {
            (self.scroll_offset + 1).min(max)
        } else {
            self.scroll_offset.saturating_sub(1)
        };
    }

    /// Submit the form the way the submit button would
    pub fn submit(&mut self) {
        self.commit_change();
        self.dispatch(FormEvent::FormSubmitted);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(platform::SUBMIT_MODIFIER);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Esc => self.dispatch(FormEvent::NotificationDismissed),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter if self.focus == Focus::Submit => self.submit(),
            KeyCode::Enter => self.focus_next(),
            KeyCode::Left => self.cycle(false),
            KeyCode::Right => self.cycle(true),
            KeyCode::Char(' ') if self.focused_field().is_some_and(|f| f.is_checkable()) => {
                if let Some(field_id) = self.focused_id() {
                    self.dispatch(FormEvent::CheckToggled { field_id });
                }
            }
            KeyCode::Char(c) if !ctrl => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
    }

    /// Left/Right on a select, radio group or checkbox group
    fn cycle(&mut self, forward: bool) {
        let Focus::Row(index) = self.focus else {
            return;
        };
        let fields = self.row_fields(index);
        let Some(first) = fields.first() else {
            return;
        };

        match first.kind {
            FieldKind::Select => {
                if let Some(option) = first.cycle_option(forward) {
                    let event = FormEvent::OptionSelected {
                        field_id: first.id.clone(),
                        value: option.value.clone(),
                    };
                    self.dispatch(event);
                }
            }
            FieldKind::Radio | FieldKind::Checkbox => {
                let count = fields.len();
                let kind = first.kind;
                self.option_cursor = if forward {
                    (self.option_cursor + 1) % count
                } else {
                    (self.option_cursor + count - 1) % count
                };
                if kind == FieldKind::Radio {
                    if let Some(field_id) = self.focused_id() {
                        self.dispatch(FormEvent::CheckToggled { field_id });
                    }
                }
            }
            FieldKind::Text | FieldKind::Number => {}
        }
    }

    fn type_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let accepted = match field.kind {
            FieldKind::Text => true,
            FieldKind::Number => c.is_ascii_digit() || matches!(c, '.' | '-'),
            _ => false,
        };
        if !accepted {
            return;
        }

        let field_id = field.id.clone();
        let mut value = field.value.clone();
        value.push(c);
        self.edit(field_id, value);
    }

    fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if !matches!(field.kind, FieldKind::Text | FieldKind::Number) {
            return;
        }

        let field_id = field.id.clone();
        let mut value = field.value.clone();
        value.pop();
        self.edit(field_id, value);
    }

    fn edit(&mut self, field_id: String, value: String) {
        self.pending_change = Some(field_id.clone());
        self.dispatch(FormEvent::FieldInput { field_id, value });
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => self.handle_hover(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => self.scroll_by(false),
            MouseEventKind::ScrollDown => self.scroll_by(true),
            _ => {}
        }
    }

    /// Translate pointer movement into label enter/leave events
    fn handle_hover(&mut self, column: u16, row: u16) {
        let hovered = self
            .layout()
            .label_at(column, row)
            .and_then(|area| self.rows.get(area.index))
            .map(|r| r.label_for.clone());

        if hovered == self.hovered_label {
            return;
        }
        if let Some(label_for) = self.hovered_label.take() {
            self.dispatch(FormEvent::PointerLeft { label_for });
        }
        if let Some(label_for) = hovered.clone() {
            self.dispatch(FormEvent::PointerEntered { label_for });
        }
        self.hovered_label = hovered;
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let area = self.screen_area();
        if self.assistant.registry().notification().is_some()
            && ScreenLayout::toast_close(area) == Position::new(column, row)
        {
            self.dispatch(FormEvent::NotificationDismissed);
            return;
        }

        let layout = self.layout();
        if layout.submit_contains(column, row) {
            self.set_focus(Focus::Submit);
            self.submit();
            return;
        }

        let Some(hit) = layout.row_at(column, row).copied() else {
            return;
        };
        self.set_focus(Focus::Row(hit.index));

        let fields = self.row_fields(hit.index);
        if !fields.first().is_some_and(|f| f.is_checkable()) {
            return;
        }
        let clicked = option_areas(hit.body, &Self::option_widths(&fields))
            .iter()
            .position(|r| r.contains(Position::new(column, row)));
        if let Some(option) = clicked {
            self.option_cursor = option;
            if let Some(field_id) = self.focused_id() {
                self.dispatch(FormEvent::CheckToggled { field_id });
            }
        }
    }
}
