//! Typed page events fed to the assistant

/// A DOM-style event delivered to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The page finished loading
    PageLoaded,
    /// A text or number field was edited to `value` (`input`)
    FieldInput { field_id: String, value: String },
    /// A field's value was committed (`change`)
    FieldChanged { field_id: String },
    /// A select switched to `value` (`input` then `change`)
    OptionSelected { field_id: String, value: String },
    /// A checkbox was flipped or a radio picked (`input` then `change`)
    CheckToggled { field_id: String },
    /// The form was submitted
    FormSubmitted,
    /// The pointer entered the label for `label_for`
    PointerEntered { label_for: String },
    /// The pointer left the label for `label_for`
    PointerLeft { label_for: String },
    /// The notification's close control was used
    NotificationDismissed,
}
