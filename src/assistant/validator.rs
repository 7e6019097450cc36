//! Required-field and numeric-bounds validation

use super::FormAssistant;
use crate::state::{format_number, FieldKind, FieldStatus};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_SUBMIT_MESSAGE: &str = "Please fill in all required fields";

impl FormAssistant {
    /// Flag every blank required field; true when none was blank
    pub(super) fn validate_required(&mut self) -> bool {
        let mut is_valid = true;

        for id in self.form.required_field_ids() {
            let blank = self.form.field(&id).is_some_and(|f| f.is_blank());
            if blank {
                is_valid = false;
                self.set_status(&id, FieldStatus::Invalid);
                self.show_error(&id, REQUIRED_MESSAGE);
            } else {
                self.set_status(&id, FieldStatus::Valid);
                self.hide_error(&id);
            }
        }

        is_valid
    }

    /// Snap a numeric field back into its bounds.
    ///
    /// A value that does not parse compares false against both bounds and is
    /// treated as in range.
    pub(super) fn validate_number(&mut self, field_id: &str) {
        let Some(field) = self.form.field(field_id) else {
            return;
        };
        if field.kind != FieldKind::Number {
            return;
        }

        let value = field.numeric_value();
        let below = field.min.filter(|min| value < *min);
        let above = field.max.filter(|max| value > *max);

        if let Some(min) = below {
            self.set_value(field_id, format_number(min));
            self.show_error(field_id, &format!("Minimum value is {}", format_number(min)));
        } else if let Some(max) = above {
            self.set_value(field_id, format_number(max));
            self.show_error(field_id, &format!("Maximum value is {}", format_number(max)));
        } else {
            self.hide_error(field_id);
            self.set_status(field_id, FieldStatus::Valid);
        }
    }

    fn set_status(&mut self, field_id: &str, status: FieldStatus) {
        if let Some(field) = self.form.field_mut(field_id) {
            field.status = status;
        }
    }

    fn set_value(&mut self, field_id: &str, value: String) {
        if let Some(field) = self.form.field_mut(field_id) {
            field.value = value;
        }
    }
}
