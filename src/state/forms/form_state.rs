//! The form document: fields, labels, submit button and estimate display

use super::field::{FieldKind, FormField};
use ratatui::style::Color;

/// A `<label for=...>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Id of the field (or name of the group) the label describes
    pub for_id: String,
    pub text: String,
}

/// The form's submit button
#[derive(Debug, Clone)]
pub struct SubmitButton {
    pub text: String,
    pub disabled: bool,
}

impl SubmitButton {
    pub const IDLE_TEXT: &'static str = "Calculate Footprint";
    pub const LOADING_TEXT: &'static str = "Calculating...";

    /// Switch to the loading state shown while a submission is in flight
    pub fn set_loading(&mut self) {
        self.text = Self::LOADING_TEXT.to_string();
        self.disabled = true;
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            text: Self::IDLE_TEXT.to_string(),
            disabled: false,
        }
    }
}

/// Element showing the quick estimate
#[derive(Debug, Clone, Default)]
pub struct EstimateDisplay {
    pub text: String,
    pub color: Option<Color>,
}

/// One visual row of the form: a label and the elements it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub label_for: String,
    pub label: String,
    /// Indices into the form's field list, in document order
    pub fields: Vec<usize>,
}

/// The whole form document
#[derive(Debug, Clone)]
pub struct Form {
    pub id: String,
    fields: Vec<FormField>,
    labels: Vec<Label>,
    pub submit: SubmitButton,
    pub estimate_display: Option<EstimateDisplay>,
}

impl Form {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            fields: Vec::new(),
            labels: Vec::new(),
            submit: SubmitButton::default(),
            estimate_display: None,
        }
    }

    /// Append a label followed by the fields it describes
    pub fn with_labeled(mut self, label: &str, for_id: &str, fields: Vec<FormField>) -> Self {
        self.labels.push(Label {
            for_id: for_id.to_string(),
            text: label.to_string(),
        });
        self.fields.extend(fields);
        self
    }

    /// Attach the quick estimate element
    pub fn with_estimate_display(mut self) -> Self {
        self.estimate_display = Some(EstimateDisplay::default());
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up a field by id
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Value of the field with `id`, or an empty string when absent
    pub fn value_of(&self, id: &str) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// All elements sharing `name`, in document order
    pub fn fields_named_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut FormField> + 'a {
        self.fields.iter_mut().filter(move |f| f.name == name)
    }

    pub fn has_field_named(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Ids of every field flagged `required`, in document order
    pub fn required_field_ids(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.id.clone())
            .collect()
    }

    pub fn label(&self, for_id: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.for_id == for_id)
    }

    /// Successful controls as `(name, value)` pairs in document order.
    ///
    /// Checkboxes and radios contribute only when checked.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|f| !f.is_checkable() || f.checked)
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Check a radio button and clear the rest of its group, or flip a checkbox
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some((kind, name)) = self.field(id).map(|f| (f.kind, f.name.clone())) else {
            return false;
        };
        match kind {
            FieldKind::Checkbox => {
                if let Some(field) = self.field_mut(id) {
                    field.checked = !field.checked;
                }
                true
            }
            FieldKind::Radio => {
                for radio in self.fields_named_mut(&name) {
                    if radio.kind == FieldKind::Radio {
                        radio.checked = radio.id == id;
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// Group fields under their labels for display and focus handling
    pub fn rows(&self) -> Vec<FormRow> {
        self.labels
            .iter()
            .map(|label| FormRow {
                label_for: label.for_id.clone(),
                label: label.text.clone(),
                fields: self
                    .fields
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| f.id == label.for_id || f.name == label.for_id)
                    .map(|(i, _)| i)
                    .collect(),
            })
            .filter(|row| !row.fields.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_form() -> Form {
        Form::new("sample")
            .with_labeled("Name", "name", vec![FormField::text("name").required()])
            .with_labeled(
                "Colors",
                "X",
                vec![
                    FormField::checkbox("X", "a"),
                    FormField::checkbox("X", "b"),
                    FormField::checkbox("X", "c"),
                ],
            )
            .with_labeled(
                "Size",
                "size",
                vec![FormField::radio("size", "S"), FormField::radio("size", "L")],
            )
    }

    #[test]
    fn test_entries_skip_unchecked() {
        let mut form = sample_form();
        form.field_mut("name").unwrap().value = "Ada".to_string();
        form.toggle("X-a");
        form.toggle("X-c");

        assert_eq!(
            form.entries(),
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("X".to_string(), "a".to_string()),
                ("X".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_radio_toggle_is_exclusive() {
        let mut form = sample_form();
        form.toggle("size-S");
        form.toggle("size-L");
        assert!(!form.field("size-S").unwrap().checked);
        assert!(form.field("size-L").unwrap().checked);
    }

    #[test]
    fn test_checkbox_toggle_flips() {
        let mut form = sample_form();
        assert!(form.toggle("X-b"));
        assert!(form.field("X-b").unwrap().checked);
        assert!(form.toggle("X-b"));
        assert!(!form.field("X-b").unwrap().checked);
    }

    #[test]
    fn test_toggle_text_field_is_rejected() {
        let mut form = sample_form();
        assert!(!form.toggle("name"));
        assert!(!form.toggle("missing"));
    }

    #[test]
    fn test_rows_group_by_label() {
        let form = sample_form();
        let rows = form.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].fields, vec![0]);
        assert_eq!(rows[1].fields, vec![1, 2, 3]);
        assert_eq!(rows[2].fields, vec![4, 5]);
    }

    #[test]
    fn test_required_field_ids() {
        assert_eq!(sample_form().required_field_ids(), vec!["name".to_string()]);
    }

    #[test]
    fn test_value_of_missing_field_is_empty() {
        assert_eq!(sample_form().value_of("nope"), "");
    }

    #[test]
    fn test_submit_loading_state() {
        let mut submit = SubmitButton::default();
        assert!(!submit.disabled);
        submit.set_loading();
        assert!(submit.disabled);
        assert_eq!(submit.text, SubmitButton::LOADING_TEXT);
    }
}
