//! Registry of the ephemeral elements the assistant injects into the page
//!
//! Each element gets a fresh [`ElementId`] when created. Timers carry the id
//! of the element they target, so a timer that outlives its element finds a
//! different id (or nothing) in the registry and does nothing.

use super::palette;
use ratatui::style::Color;
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

/// Identity of an injected element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline error text attached next to a field
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    pub id: ElementId,
    pub text: String,
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    /// Background color of the notification
    pub fn color(self) -> Color {
        match self {
            Self::Success => palette::VALID_GREEN,
            Self::Error => palette::INVALID_RED,
            Self::Info => palette::INFO_BLUE,
            Self::Warning => palette::WARNING_ORANGE,
        }
    }
}

/// The single global notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ElementId,
    pub message: String,
    pub kind: NotificationKind,
}

/// Linear opacity transition eased at render time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub start: Duration,
    pub duration: Duration,
    pub from: f32,
    pub to: f32,
}

impl Fade {
    /// Opacity at virtual time `now`
    pub fn opacity(&self, now: Duration) -> f32 {
        if self.duration.is_zero() || now >= self.start + self.duration {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.start);
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = simple_easing::cubic_in_out(progress);
        self.from + (self.to - self.from) * eased
    }

    /// True once the target is fully transparent, even if the fade never got going
    pub fn is_fading_out(&self) -> bool {
        self.to <= 0.0
    }
}

/// Help bubble attached to a label
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub id: ElementId,
    pub text: String,
    pub fade: Fade,
}

/// Keyed store of every live injected element
#[derive(Debug, Default)]
pub struct UiRegistry {
    /// Field id -> inline error
    errors: HashMap<String, ErrorMessage>,
    notification: Option<Notification>,
    /// Label `for` id -> tooltip
    tooltips: HashMap<String, Tooltip>,
}

impl UiRegistry {
    pub fn error(&self, field_id: &str) -> Option<&ErrorMessage> {
        self.errors.get(field_id)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Attach or update the error for a field; the element id survives an update
    pub fn set_error(&mut self, field_id: &str, text: &str) {
        self.errors
            .entry(field_id.to_string())
            .and_modify(|e| e.text = text.to_string())
            .or_insert_with(|| ErrorMessage {
                id: ElementId::new(),
                text: text.to_string(),
            });
    }

    pub fn remove_error(&mut self, field_id: &str) -> Option<ErrorMessage> {
        self.errors.remove(field_id)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Install a notification, returning the one it displaced
    pub fn replace_notification(&mut self, notification: Notification) -> Option<Notification> {
        self.notification.replace(notification)
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Remove the notification only if it is still the element `id`
    pub fn remove_notification_if(&mut self, id: ElementId) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
            true
        } else {
            false
        }
    }

    pub fn tooltip(&self, label_for: &str) -> Option<&Tooltip> {
        self.tooltips.get(label_for)
    }

    pub fn tooltip_mut(&mut self, label_for: &str) -> Option<&mut Tooltip> {
        self.tooltips.get_mut(label_for)
    }

    pub fn tooltips(&self) -> impl Iterator<Item = (&String, &Tooltip)> {
        self.tooltips.iter()
    }

    /// Install a tooltip under a label, returning the one it displaced
    pub fn replace_tooltip(&mut self, label_for: &str, tooltip: Tooltip) -> Option<Tooltip> {
        self.tooltips.insert(label_for.to_string(), tooltip)
    }

    /// Remove the label's tooltip only if it is still the element `id`
    pub fn remove_tooltip_if(&mut self, label_for: &str, id: ElementId) -> bool {
        if self.tooltips.get(label_for).is_some_and(|t| t.id == id) {
            self.tooltips.remove(label_for);
            true
        } else {
            false
        }
    }
}
