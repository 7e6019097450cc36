//! Hover help text for field labels

use super::registry::{ElementId, Fade, Tooltip};
use super::timers::TimerTask;
use super::FormAssistant;

/// Help text for a field id, if it has any
pub fn tooltip_text(field_id: &str) -> Option<&'static str> {
    let text = match field_id {
        "Diet" => "Your dietary choices significantly impact carbon emissions.",
        "Transport" => "Primary mode of transportation affects emissions greatly.",
        "Vehicle Monthly Distance Km" => "Distance traveled by vehicle per month.",
        "Frequency of Traveling by Air" => "Air travel has high carbon impact.",
        "Heating Energy Source" => "Energy source used for home heating.",
        "Energy efficiency" => "How energy efficient are your appliances?",
        "Recycling" => "Recycling helps reduce waste-related emissions.",
        "Monthly Grocery Bill" => "Higher spending often correlates with higher emissions.",
        _ => return None,
    };
    Some(text)
}

impl FormAssistant {
    /// Create a tooltip above the label, fading in
    pub(super) fn show_tooltip(&mut self, label_for: &str) {
        if self.form.label(label_for).is_none() {
            return;
        }
        let Some(text) = tooltip_text(label_for) else {
            return;
        };

        let tooltip = Tooltip {
            id: ElementId::new(),
            text: text.to_string(),
            fade: Fade {
                start: self.timers.now(),
                duration: self.timings.tooltip_fade,
                from: 0.0,
                to: 1.0,
            },
        };
        if self.registry.replace_tooltip(label_for, tooltip).is_some() {
            tracing::debug!("Replaced tooltip for {label_for}");
        }
    }

    /// Fade the label's tooltip out and remove it once the fade is over
    pub(super) fn hide_tooltip(&mut self, label_for: &str) {
        let now = self.timers.now();
        let duration = self.timings.tooltip_fade;
        let Some(tooltip) = self.registry.tooltip_mut(label_for) else {
            return;
        };
        // Removal is already scheduled
        if tooltip.fade.is_fading_out() {
            return;
        }

        tooltip.fade = Fade {
            start: now,
            duration,
            from: tooltip.fade.opacity(now),
            to: 0.0,
        };
        let id = tooltip.id;

        self.timers.schedule(
            duration,
            TimerTask::RemoveTooltip {
                label_for: label_for.to_string(),
                id,
            },
        );
    }

    /// Current opacity of the label's tooltip
    pub fn tooltip_opacity(&self, label_for: &str) -> Option<f32> {
        self.registry
            .tooltip(label_for)
            .map(|t| t.fade.opacity(self.timers.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::FormEvent;
    use super::*;
    use crate::state::carbon_calculator;

    fn enter(label_for: &str) -> FormEvent {
        FormEvent::PointerEntered {
            label_for: label_for.to_string(),
        }
    }

    fn leave(label_for: &str) -> FormEvent {
        FormEvent::PointerLeft {
            label_for: label_for.to_string(),
        }
    }

    #[test]
    fn test_known_and_unknown_ids() {
        assert_eq!(
            tooltip_text("Recycling"),
            Some("Recycling helps reduce waste-related emissions.")
        );
        assert!(tooltip_text("Sex").is_none());
    }

    #[test]
    fn test_enter_fades_in() {
        let mut assistant = assistant(carbon_calculator());
        assistant.dispatch(enter("Diet"));

        assert_eq!(assistant.tooltip_opacity("Diet"), Some(0.0));
        assistant.advance(ms(300));
        assert_eq!(assistant.tooltip_opacity("Diet"), Some(1.0));
        assert_eq!(
            assistant.registry().tooltip("Diet").unwrap().text,
            "Your dietary choices significantly impact carbon emissions."
        );
    }

    #[test]
    fn test_label_without_entry_gets_nothing() {
        let mut assistant = assistant(carbon_calculator());
        assistant.dispatch(enter("Sex"));
        assert!(assistant.registry().tooltip("Sex").is_none());
    }

    #[test]
    fn test_entry_without_label_gets_nothing() {
        let mut assistant = assistant(small_form());
        assistant.dispatch(enter("Transport"));
        assert!(assistant.registry().tooltip("Transport").is_none());
    }

    #[test]
    fn test_leave_removes_after_fade() {
        let mut assistant = assistant(carbon_calculator());
        assistant.dispatch(enter("Transport"));
        assistant.advance(ms(1000));
        assistant.dispatch(leave("Transport"));

        assistant.advance(ms(1299));
        assert!(assistant.registry().tooltip("Transport").is_some());
        assistant.advance(ms(1300));
        assert!(assistant.registry().tooltip("Transport").is_none());
        assert_eq!(assistant.registry().tooltips().count(), 0);
    }

    #[test]
    fn test_reenter_during_fade_out_keeps_one_tooltip() {
        let mut assistant = assistant(carbon_calculator());
        assistant.dispatch(enter("Transport"));
        assistant.advance(ms(500));
        assistant.dispatch(leave("Transport"));
        assistant.advance(ms(600));
        assistant.dispatch(enter("Transport"));

        assert_eq!(assistant.registry().tooltips().count(), 1);

        // The removal scheduled by the first leave targets the replaced element
        assistant.advance(ms(800));
        assert!(assistant.registry().tooltip("Transport").is_some());
        assistant.advance(ms(900));
        assert_eq!(assistant.tooltip_opacity("Transport"), Some(1.0));
    }

    #[test]
    fn test_leave_without_tooltip_is_noop() {
        let mut assistant = assistant(carbon_calculator());
        assistant.dispatch(leave("Diet"));
        assistant.advance(ms(1000));
        assert_eq!(assistant.registry().tooltips().count(), 0);
    }
}
