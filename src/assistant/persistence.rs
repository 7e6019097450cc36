//! Saving the form to local storage on every edit and restoring it on load

use super::FormAssistant;
use crate::state::Form;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A saved value: one string, or every value of a multi-valued name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavedValue {
    Single(String),
    Multiple(Vec<String>),
}

impl SavedValue {
    /// Whether a checkbox or radio carrying `value` should be checked
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Single(v) => v == value,
            Self::Multiple(values) => values.iter().any(|v| v == value),
        }
    }

    /// Value written into a single-valued element
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            Self::Multiple(values) => values.first().map(String::as_str),
        }
    }
}

/// Snapshot of the form, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedFormState(BTreeMap<String, SavedValue>);

impl SavedFormState {
    /// Collect the form's entries; a name seen more than once becomes a list
    pub fn capture(form: &Form) -> Self {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in form.entries() {
            grouped.entry(name).or_default().push(value);
        }

        Self(
            grouped
                .into_iter()
                .map(|(name, mut values)| {
                    let value = if values.len() > 1 {
                        SavedValue::Multiple(values)
                    } else {
                        SavedValue::Single(values.pop().unwrap_or_default())
                    };
                    (name, value)
                })
                .collect(),
        )
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&SavedValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write the snapshot back into `form`, returning how many names matched
    pub fn apply(&self, form: &mut Form) -> usize {
        let mut restored = 0;

        for (name, saved) in &self.0 {
            if !form.has_field_named(name) {
                continue;
            }
            restored += 1;

            for field in form.fields_named_mut(name) {
                if field.is_checkable() {
                    field.checked = saved.contains(&field.value);
                } else if let Some(value) = saved.first() {
                    field.value = value.to_string();
                }
            }
        }

        restored
    }
}

impl FormAssistant {
    /// Serialize every field into storage, overwriting the previous snapshot
    pub fn auto_save_form(&mut self) {
        let snapshot = SavedFormState::capture(&self.form);
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize form state: {e}");
                return;
            }
        };

        match self.storage.set_item(&self.storage_key, &json) {
            Ok(()) => self.last_saved = Some(Local::now()),
            Err(e) => tracing::warn!("Failed to save form state: {e}"),
        }
    }

    /// Restore the saved snapshot, if there is a readable one
    pub fn load_saved_form(&mut self) {
        let raw = match self.storage.get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Failed to read saved form state: {e}");
                return;
            }
        };

        let snapshot: SavedFormState = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Ignoring unreadable saved form state: {e}");
                return;
            }
        };

        if snapshot.is_empty() {
            return;
        }
        let restored = snapshot.apply(&mut self.form);
        tracing::info!("Restored {restored} saved fields");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::FormEvent;
    use super::*;
    use crate::storage::{FormStorage, MemoryStorage, MockFormStorage, StorageError};
    use crate::config::Timings;
    use pretty_assertions::assert_eq;

    fn toggle(field_id: &str) -> FormEvent {
        FormEvent::CheckToggled {
            field_id: field_id.to_string(),
        }
    }

    fn stored(storage: &MemoryStorage) -> serde_json::Value {
        let raw = storage.get_item(KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    mod saved_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scalar_and_list_json_shapes() {
            let single: SavedValue = serde_json::from_str(r#""x""#).unwrap();
            let multiple: SavedValue = serde_json::from_str(r#"["a","c"]"#).unwrap();
            assert_eq!(single, SavedValue::Single("x".to_string()));
            assert_eq!(
                multiple,
                SavedValue::Multiple(vec!["a".to_string(), "c".to_string()])
            );
        }

        #[test]
        fn test_contains_and_first() {
            let multiple = SavedValue::Multiple(vec!["a".to_string(), "c".to_string()]);
            assert!(multiple.contains("c"));
            assert!(!multiple.contains("b"));
            assert_eq!(multiple.first(), Some("a"));
            assert_eq!(SavedValue::Multiple(Vec::new()).first(), None);
        }
    }

    #[test]
    fn test_capture_groups_multi_valued_names() {
        let mut form = small_form();
        form.toggle("X-a");
        form.toggle("X-c");
        form.field_mut("Y").unwrap().value = "hello".to_string();

        let json = serde_json::to_value(SavedFormState::capture(&form)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "",
                "count": "",
                "Diet": "",
                "X": ["a", "c"],
                "Y": "hello",
            })
        );
    }

    #[test]
    fn test_single_checked_box_saves_scalar() {
        let mut form = small_form();
        form.toggle("X-b");
        assert_eq!(
            SavedFormState::capture(&form).get("X"),
            Some(&SavedValue::Single("b".to_string()))
        );
    }

    #[test]
    fn test_round_trip_into_fresh_form() {
        let mut storage = MemoryStorage::new();
        {
            let mut first = assistant_with_storage(small_form(), MemoryStorage::new());
            first.dispatch(toggle("X-a"));
            first.dispatch(toggle("X-c"));
            first.dispatch(FormEvent::FieldInput {
                field_id: "Y".to_string(),
                value: "hello".to_string(),
            });
            let raw = first.storage.get_item(KEY).unwrap().unwrap();
            storage.set_item(KEY, &raw).unwrap();
        }

        let mut second = assistant_with_storage(small_form(), storage);
        second.load_saved_form();

        let form = second.form();
        assert!(form.field("X-a").unwrap().checked);
        assert!(!form.field("X-b").unwrap().checked);
        assert!(form.field("X-c").unwrap().checked);
        assert_eq!(form.value_of("Y"), "hello");
    }

    #[test]
    fn test_saved_state_tracks_last_edit() {
        let mut storage = MemoryStorage::new();
        let mut assistant = assistant_with_storage(small_form(), MemoryStorage::new());
        assistant.dispatch(toggle("X-a"));
        assistant.dispatch(toggle("X-a"));
        let raw = assistant.storage.get_item(KEY).unwrap().unwrap();
        storage.set_item(KEY, &raw).unwrap();

        assert!(stored(&storage).get("X").is_none());
    }

    #[test]
    fn test_radio_restored_from_scalar() {
        let form = || {
            Form::new("radio").with_labeled(
                "Size",
                "size",
                vec![
                    crate::state::FormField::radio("size", "S"),
                    crate::state::FormField::radio("size", "L"),
                ],
            )
        };
        let mut storage = MemoryStorage::new();
        storage.set_item(KEY, r#"{"size":"L"}"#).unwrap();
        let mut assistant = assistant_with_storage(form(), storage);

        assistant.load_saved_form();

        assert!(!assistant.form().field("size-S").unwrap().checked);
        assert!(assistant.form().field("size-L").unwrap().checked);
    }

    #[test]
    fn test_list_into_single_field_takes_first() {
        let mut storage = MemoryStorage::new();
        storage.set_item(KEY, r#"{"Y":["one","two"]}"#).unwrap();
        let mut assistant = assistant_with_storage(small_form(), storage);
        assistant.load_saved_form();
        assert_eq!(assistant.form().value_of("Y"), "one");
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let mut form = small_form();
        let snapshot: SavedFormState =
            serde_json::from_str(r#"{"ghost":"boo","Y":"hi"}"#).unwrap();
        assert_eq!(snapshot.apply(&mut form), 1);
        assert_eq!(form.value_of("Y"), "hi");
    }

    #[test]
    fn test_unparseable_state_is_ignored() {
        let mut storage = MemoryStorage::new();
        storage.set_item(KEY, "{not json").unwrap();
        let mut assistant = assistant_with_storage(small_form(), storage);
        assistant.load_saved_form();
        assert_eq!(assistant.form().value_of("Y"), "");
    }

    #[test]
    fn test_load_does_not_save() {
        let mut mock = MockFormStorage::new();
        mock.expect_get_item()
            .returning(|_| Ok(Some(r#"{"Y":"hello"}"#.to_string())));
        mock.expect_set_item().never();

        let mut assistant =
            FormAssistant::new(small_form(), Box::new(mock), KEY, Timings::default());
        assistant.load_saved_form();

        assert_eq!(assistant.form().value_of("Y"), "hello");
    }

    #[test]
    fn test_storage_failures_stay_silent() {
        let mut mock = MockFormStorage::new();
        mock.expect_get_item().returning(|_| {
            Err(StorageError::Read {
                path: "slot.json".into(),
                source: std::io::Error::other("disk gone"),
            })
        });
        mock.expect_set_item()
            .times(1)
            .returning(|_, _| {
                Err(StorageError::Write {
                    path: "slot.json".into(),
                    source: std::io::Error::other("disk full"),
                })
            });

        let mut assistant =
            FormAssistant::new(small_form(), Box::new(mock), KEY, Timings::default());
        assistant.load_saved_form();
        assistant.dispatch(FormEvent::FieldInput {
            field_id: "Y".to_string(),
            value: "x".to_string(),
        });

        assert!(assistant.last_saved().is_none());
        assert_eq!(assistant.form().value_of("Y"), "x");
    }
}
