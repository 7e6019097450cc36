//! Form assistant: validation, notifications, live estimate, tooltips and
//! persistence for the calculator form.
//!
//! Every responsibility is a set of handlers on [`FormAssistant`] living in
//! its own module. [`FormAssistant::dispatch`] fans a [`FormEvent`] out to the
//! handlers registered for it, in the order a browser would run the element
//! listener before the form listener. Deferred work goes through a virtual
//! clock advanced with [`FormAssistant::advance`].

mod estimator;
mod events;
mod notifier;
pub mod palette;
mod persistence;
mod registry;
mod timers;
mod tooltip;
mod validator;

pub use events::FormEvent;
pub use persistence::SavedFormState;
pub use registry::{ErrorMessage, Notification, NotificationKind};
pub use validator::INVALID_SUBMIT_MESSAGE;

use crate::config::Timings;
use crate::state::Form;
use crate::storage::FormStorage;
use chrono::{DateTime, Local};
use registry::UiRegistry;
use timers::{TimerQueue, TimerTask};
use std::time::Duration;

/// What the page should do after an event was handled
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Handled,
    /// The default action (form submission) was prevented
    DefaultPrevented,
    /// Submission proceeds with this payload
    Submitted(SavedFormState),
}

/// The form plus every piece of UI state the assistant manages around it
pub struct FormAssistant {
    form: Form,
    registry: UiRegistry,
    timers: TimerQueue,
    storage: Box<dyn FormStorage>,
    storage_key: String,
    timings: Timings,
    last_saved: Option<DateTime<Local>>,
}

impl FormAssistant {
    pub fn new(
        form: Form,
        storage: Box<dyn FormStorage>,
        storage_key: impl Into<String>,
        timings: Timings,
    ) -> Self {
        Self {
            form,
            registry: UiRegistry::default(),
            timers: TimerQueue::default(),
            storage,
            storage_key: storage_key.into(),
            timings,
            last_saved: None,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn registry(&self) -> &UiRegistry {
        &self.registry
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Wall-clock time of the last successful save
    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        self.last_saved
    }

    /// Deliver one event to every handler listening for it
    pub fn dispatch(&mut self, event: FormEvent) -> EventOutcome {
        tracing::debug!("Dispatching {event:?}");

        match event {
            FormEvent::PageLoaded => {
                self.timers
                    .schedule(self.timings.restore_delay, TimerTask::RestoreSavedForm);
            }
            FormEvent::FieldInput { field_id, value } => {
                let Some(field) = self.form.field_mut(&field_id) else {
                    tracing::debug!("Input for unknown field {field_id}");
                    return EventOutcome::Handled;
                };
                field.value = value;
                self.on_input(&field_id);
            }
            FormEvent::FieldChanged { field_id } => {
                if self.form.field(&field_id).is_none() {
                    tracing::debug!("Change for unknown field {field_id}");
                    return EventOutcome::Handled;
                }
                self.on_change();
            }
            FormEvent::OptionSelected { field_id, value } => {
                let Some(field) = self.form.field_mut(&field_id) else {
                    tracing::debug!("Selection for unknown field {field_id}");
                    return EventOutcome::Handled;
                };
                field.value = value;
                self.on_input(&field_id);
                self.on_change();
            }
            FormEvent::CheckToggled { field_id } => {
                if !self.form.toggle(&field_id) {
                    tracing::debug!("Toggle for non-checkable field {field_id}");
                    return EventOutcome::Handled;
                }
                self.on_input(&field_id);
                self.on_change();
            }
            FormEvent::FormSubmitted => return self.on_submit(),
            FormEvent::PointerEntered { label_for } => self.show_tooltip(&label_for),
            FormEvent::PointerLeft { label_for } => self.hide_tooltip(&label_for),
            FormEvent::NotificationDismissed => {
                self.dismiss_notification();
            }
        }

        EventOutcome::Handled
    }

    /// Move the virtual clock to `now` and run every timer that came due
    pub fn advance(&mut self, now: Duration) {
        let due = self.timers.advance_to(now);
        if !due.is_empty() {
            tracing::debug!(
                "Running {} timers, {} still pending",
                due.len(),
                self.timers.pending()
            );
        }

        for task in due {
            match task {
                TimerTask::ExpireNotification(id) => self.expire_notification(id),
                TimerTask::RemoveTooltip { label_for, id } => {
                    if self.registry.remove_tooltip_if(&label_for, id) {
                        tracing::debug!("Removed tooltip for {label_for}");
                    }
                }
                TimerTask::RestoreSavedForm => self.load_saved_form(),
            }
        }
    }

    fn on_input(&mut self, field_id: &str) {
        self.validate_number(field_id);
        self.auto_save_form();
    }

    fn on_change(&mut self) {
        self.update_estimate();
        self.auto_save_form();
    }

    fn on_submit(&mut self) -> EventOutcome {
        if self.form.submit.disabled {
            tracing::debug!("Submit ignored while a submission is in flight");
            return EventOutcome::DefaultPrevented;
        }

        if !self.validate_required() {
            self.show_notification(INVALID_SUBMIT_MESSAGE, NotificationKind::Error);
            return EventOutcome::DefaultPrevented;
        }

        self.form.submit.set_loading();
        let payload = SavedFormState::capture(&self.form);
        tracing::info!("Submitting form with {} fields", payload.len());
        EventOutcome::Submitted(payload)
    }
}


#[cfg(test)]
mod tests {
    use super::persistence::SavedValue;
    use super::test_support::*;
    use super::validator::REQUIRED_MESSAGE;
    use super::*;
    use crate::state::{carbon_calculator, FieldStatus};

    fn input(field_id: &str, value: &str) -> FormEvent {
        FormEvent::FieldInput {
            field_id: field_id.to_string(),
            value: value.to_string(),
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_blank_required_fields_prevent_submission() {
            let mut assistant = assistant(small_form());
            assistant.dispatch(input("name", "Ada"));

            let outcome = assistant.dispatch(FormEvent::FormSubmitted);

            assert_eq!(outcome, EventOutcome::DefaultPrevented);
            assert!(assistant.registry().error("name").is_none());
            assert_eq!(
                assistant.registry().error("count").unwrap().text,
                REQUIRED_MESSAGE
            );
            assert_eq!(
                assistant.registry().error("Diet").unwrap().text,
                REQUIRED_MESSAGE
            );
            assert_eq!(
                assistant.form().field("count").unwrap().status,
                FieldStatus::Invalid
            );
            assert_eq!(
                assistant.form().field("name").unwrap().status,
                FieldStatus::Valid
            );

            let notification = assistant.registry().notification().unwrap();
            assert_eq!(notification.kind, NotificationKind::Error);
            assert_eq!(notification.message, INVALID_SUBMIT_MESSAGE);
            assert!(!assistant.form().submit.disabled);
        }

        #[test]
        fn test_whitespace_only_counts_as_blank() {
            let mut assistant = assistant(small_form());
            assistant.dispatch(input("name", "   "));
            assistant.dispatch(FormEvent::FormSubmitted);
            assert!(assistant.registry().error("name").is_some());
        }

        #[test]
        fn test_complete_form_submits_and_locks_button() {
            let mut assistant = assistant(small_form());
            assistant.dispatch(input("name", "Ada"));
            assistant.dispatch(input("count", "3"));
            assistant.dispatch(FormEvent::OptionSelected {
                field_id: "Diet".to_string(),
                value: "vegan".to_string(),
            });

            let outcome = assistant.dispatch(FormEvent::FormSubmitted);

            let EventOutcome::Submitted(payload) = outcome else {
                panic!("expected submission, got {outcome:?}");
            };
            assert_eq!(
                payload.get("Diet"),
                Some(&SavedValue::Single("vegan".to_string()))
            );
            assert!(assistant.registry().notification().is_none());
            assert!(assistant.form().submit.disabled);
            assert_eq!(
                assistant.dispatch(FormEvent::FormSubmitted),
                EventOutcome::DefaultPrevented
            );
        }

        #[test]
        fn test_resubmit_clears_fixed_errors() {
            let mut assistant = assistant(small_form());
            assistant.dispatch(FormEvent::FormSubmitted);
            assert_eq!(assistant.registry().error_count(), 3);

            assistant.dispatch(input("name", "Ada"));
            assistant.dispatch(FormEvent::FormSubmitted);

            assert!(assistant.registry().error("name").is_none());
            assert_eq!(assistant.registry().error_count(), 2);
        }
    }

    mod dispatch {
        use super::*;

        #[test]
        fn test_unknown_field_events_are_ignored() {
            let mut assistant = assistant(small_form());
            assert_eq!(
                assistant.dispatch(input("nope", "1")),
                EventOutcome::Handled
            );
            assert_eq!(
                assistant.dispatch(FormEvent::CheckToggled {
                    field_id: "name".to_string()
                }),
                EventOutcome::Handled
            );
            assert!(assistant.last_saved().is_none());
        }

        #[test]
        fn test_input_saves_form() {
            let mut assistant = assistant(small_form());
            assistant.dispatch(input("Y", "hello"));
            assert!(assistant.last_saved().is_some());
        }

        #[test]
        fn test_change_updates_estimate() {
            let mut assistant = assistant(carbon_calculator());
            assistant.dispatch(FormEvent::OptionSelected {
                field_id: "Diet".to_string(),
                value: "vegan".to_string(),
            });
            let display = assistant.form().estimate_display.as_ref().unwrap();
            assert_eq!(display.text, "1700");
            assert_eq!(display.color, Some(palette::ESTIMATE_MEDIUM));
        }

        #[test]
        fn test_page_load_restores_after_delay() {
            let mut storage = crate::storage::MemoryStorage::new();
            crate::storage::FormStorage::set_item(&mut storage, KEY, r#"{"Y":"hello"}"#)
                .unwrap();
            let mut assistant = assistant_with_storage(small_form(), storage);

            assistant.dispatch(FormEvent::PageLoaded);
            assistant.advance(ms(99));
            assert_eq!(assistant.form().value_of("Y"), "");

            assistant.advance(ms(100));
            assert_eq!(assistant.form().value_of("Y"), "hello");
        }
    }
}
