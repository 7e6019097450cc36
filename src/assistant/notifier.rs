//! Global notification and inline field errors

use super::registry::{ElementId, Notification, NotificationKind};
use super::timers::TimerTask;
use super::FormAssistant;

impl FormAssistant {
    /// Replace any visible notification with a new one that expires on its own.
    ///
    /// The displaced notification's expiry timer stays scheduled and later
    /// finds nothing to remove.
    pub fn show_notification(&mut self, message: &str, kind: NotificationKind) {
        let notification = Notification {
            id: ElementId::new(),
            message: message.to_string(),
            kind,
        };
        let id = notification.id;

        if let Some(previous) = self.registry.replace_notification(notification) {
            tracing::debug!("Replaced notification {:?}", previous.message);
        }
        self.timers.schedule(
            self.timings.notification_timeout,
            TimerTask::ExpireNotification(id),
        );
    }

    /// Close the notification; false when none was showing
    pub fn dismiss_notification(&mut self) -> bool {
        self.registry.take_notification().is_some()
    }

    /// Show `message` under the field, updating the existing error if any
    pub fn show_error(&mut self, field_id: &str, message: &str) {
        self.registry.set_error(field_id, message);
    }

    /// Remove the field's error; a no-op when there is none
    pub fn hide_error(&mut self, field_id: &str) {
        if let Some(removed) = self.registry.remove_error(field_id) {
            tracing::debug!("Removed error {:?} under {field_id}", removed.id);
        }
    }

    pub(super) fn expire_notification(&mut self, id: ElementId) {
        if self.registry.remove_notification_if(id) {
            tracing::debug!("Notification expired");
        }
    }
}
