//! Screen geometry shared by rendering and mouse handling
//!
//! ```text
//! Row 0-2:  Header (3 rows with borders)
//! Row 3+:   Form rows on the left, estimate panel and submit button on the right
//! Bottom:   Status bar (1 row)
//! ```
//!
//! Each form row is a label line, a bordered body and an error line.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;
/// Width of the estimate/submit column
pub const SIDE_PANEL_WIDTH: u16 = 30;
/// Label + bordered body + error line
pub const ROW_HEIGHT: u16 = 5;
/// Bordered body of a field
pub const BODY_HEIGHT: u16 = 3;
pub const ESTIMATE_HEIGHT: u16 = 5;
/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;
pub const TOAST_WIDTH: u16 = 48;
pub const TOAST_HEIGHT: u16 = 3;
/// Gap between checkbox/radio options on one line
const OPTION_GAP: u16 = 2;

/// Areas of one visible form row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowArea {
    /// Index into the form's rows
    pub index: usize,
    pub label: Rect,
    pub body: Rect,
    pub error: Rect,
}

/// Where everything lands for a given terminal size and scroll position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    /// Outer bordered form block
    pub form: Rect,
    pub rows: Vec<RowArea>,
    pub estimate: Rect,
    pub submit: Rect,
    pub status: Rect,
    /// How many rows fit on screen at once
    pub visible_rows: usize,
}

impl ScreenLayout {
    pub fn compute(area: Rect, row_count: usize, scroll: usize) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Header
                Constraint::Min(0),                // Content
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),                  // Form
                Constraint::Length(SIDE_PANEL_WIDTH), // Estimate + submit
            ])
            .split(vertical[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(ESTIMATE_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Min(0),
            ])
            .split(content[1]);

        let form = content[0];
        let inner = form.inner(ratatui::layout::Margin::new(1, 1));
        let visible_rows = (inner.height / ROW_HEIGHT) as usize;

        let rows = (scroll..row_count)
            .take(visible_rows)
            .enumerate()
            .map(|(slot, index)| {
                let y = inner.y + slot as u16 * ROW_HEIGHT;
                RowArea {
                    index,
                    label: Rect::new(inner.x, y, inner.width, 1),
                    body: Rect::new(inner.x, y + 1, inner.width, BODY_HEIGHT),
                    error: Rect::new(inner.x, y + 1 + BODY_HEIGHT, inner.width, 1),
                }
            })
            .collect();

        Self {
            header: vertical[0],
            form,
            rows,
            estimate: side[0],
            submit: side[1],
            status: vertical[2],
            visible_rows,
        }
    }

    /// Row whose label line is under the pointer
    pub fn label_at(&self, column: u16, row: u16) -> Option<&RowArea> {
        let pos = Position::new(column, row);
        self.rows.iter().find(|r| r.label.contains(pos))
    }

    /// Row whose label or body is under the pointer
    pub fn row_at(&self, column: u16, row: u16) -> Option<&RowArea> {
        let pos = Position::new(column, row);
        self.rows
            .iter()
            .find(|r| r.label.contains(pos) || r.body.contains(pos))
    }

    pub fn submit_contains(&self, column: u16, row: u16) -> bool {
        self.submit.contains(Position::new(column, row))
    }

    /// Notification toast in the top-right corner, over the header.
    ///
    /// Clipped to `area`; empty when the screen has no room below the first line.
    pub fn toast(area: Rect) -> Rect {
        let width = TOAST_WIDTH.min(area.width);
        Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + 1,
            width,
            TOAST_HEIGHT,
        )
        .intersection(area)
    }

    /// Cell of the toast's close glyph
    pub fn toast_close(area: Rect) -> Position {
        let toast = Self::toast(area);
        Position::new(
            toast.x + toast.width.saturating_sub(3),
            toast.y + toast.height.saturating_sub(2),
        )
    }

    /// One-line tooltip placed above the label, or below it on the first line.
    /// Clipped to `bounds`.
    pub fn tooltip(label: Rect, text_width: u16, bounds: Rect) -> Rect {
        let y = if label.y > bounds.y { label.y - 1 } else { label.y + 1 };
        Rect::new(label.x, y, text_width.saturating_add(2), 1).intersection(bounds)
    }
}

/// Cells taken by each checkbox/radio option laid out on one line inside `body`
pub fn option_areas(body: Rect, widths: &[u16]) -> Vec<Rect> {
    let inner = body.inner(ratatui::layout::Margin::new(1, 1));
    let right = inner.x + inner.width;
    let mut x = inner.x;

    widths
        .iter()
        .map(|&w| {
            let width = w.min(right.saturating_sub(x));
            let rect = Rect::new(x, inner.y, width, 1);
            x = (x + w + OPTION_GAP).min(right);
            rect
        })
        .collect()
}
