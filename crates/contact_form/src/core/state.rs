//! Form model: field values, focus ring and the submission snapshot.
//!
//! The model is an explicit value transformed only by the reducer
//! (`core/reducer.rs`); components read it when rendering but never mutate it
//! directly. Derived validation state lives next to the values so that a
//! render always sees errors consistent with the current input.

use serde::{Deserialize, Serialize};

use super::validate::{self, ValidationErrors};

/// One of the four form fields.
///
/// `key()` yields the camelCase identifier shown in the summary rows
/// ("firstName", ...); `label()` is the human-facing input label. The
/// serialized snapshot uses the same keys via its serde renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// Current (mutable) values of all four inputs. Message is optional in the
/// sense that it carries no validation rule; an empty string is a perfectly
/// valid value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Frozen copy of the field values taken at the moment of a valid submit.
/// Replaced wholesale by later valid submits, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Snapshot the current values. The message's emptiness is preserved
    /// verbatim; display logic decides whether to show a message block.
    pub fn snapshot(values: &FieldValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
        }
    }

    /// The message block for the summary view: `None` when the submitted
    /// message was empty, so "no message" and "empty message" render the
    /// same way without a sentinel string leaking into the UI.
    pub fn message_block(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.as_str())
        }
    }
}

/// Keyboard focus target: one of the inputs, or the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input(Field),
    Submit,
}

/// Tab order: the four inputs, then the submit control.
pub const FOCUS_ORDER: [FocusTarget; 5] = [
    FocusTarget::Input(Field::FirstName),
    FocusTarget::Input(Field::LastName),
    FocusTarget::Input(Field::Email),
    FocusTarget::Input(Field::Message),
    FocusTarget::Submit,
];

/// Root model the reducer operates on.
#[derive(Debug)]
pub struct FormModel {
    pub values: FieldValues,
    pub errors: ValidationErrors,
    pub submission: Option<Submission>,
    focus_index: usize,
}

impl FormModel {
    /// Initial state: everything empty, no submission, errors reflecting the
    /// empty values (firstName, lastName and email all fail by default).
    pub fn new() -> Self {
        let values = FieldValues::default();
        let errors = validate::validate(&values);
        Self {
            values,
            errors,
            submission: None,
            focus_index: 0,
        }
    }

    pub fn focused(&self) -> FocusTarget {
        FOCUS_ORDER[self.focus_index]
    }

    /// The field under focus, if focus is not on the submit control.
    pub fn focused_field(&self) -> Option<Field> {
        match self.focused() {
            FocusTarget::Input(field) => Some(field),
            FocusTarget::Submit => None,
        }
    }

    pub(super) fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % FOCUS_ORDER.len();
    }

    pub(super) fn focus_prev(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = FOCUS_ORDER.len() - 1;
        } else {
            self.focus_index -= 1;
        }
    }
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initial_state_has_empty_values_and_no_submission() {
        let model = FormModel::new();
        assert_eq!(model.values, FieldValues::default());
        assert!(model.submission.is_none());
        assert_eq!(model.focused(), FocusTarget::Input(Field::FirstName));
    }

    #[test]
    fn initial_errors_reflect_empty_values() {
        let model = FormModel::new();
        assert_eq!(model.errors.len(), 3);
    }

    #[test]
    fn get_set_roundtrip_per_field() {
        let mut values = FieldValues::default();
        for field in Field::ALL {
            values.set(field, format!("value for {}", field.key()));
        }
        assert_eq!(values.get(Field::Email), "value for email");
        assert_eq!(values.get(Field::Message), "value for message");
    }

    #[test]
    fn snapshot_preserves_empty_message_verbatim() {
        let mut values = FieldValues::default();
        values.set(Field::FirstName, "Joshua");
        let sub = Submission::snapshot(&values);
        assert_eq!(sub.message, "");
        assert_eq!(sub.message_block(), None);
    }

    #[test]
    fn message_block_present_when_non_empty() {
        let mut values = FieldValues::default();
        values.set(Field::Message, "Covid can kick rocks");
        let sub = Submission::snapshot(&values);
        assert_eq!(sub.message_block(), Some("Covid can kick rocks"));
    }

    #[test]
    fn submission_serializes_with_camel_case_keys() {
        let sub = Submission {
            first_name: "Joshua".into(),
            last_name: "Gearheart".into(),
            email: "josh@josh.com".into(),
            message: String::new(),
        };
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["firstName"], "Joshua");
        assert_eq!(json["lastName"], "Gearheart");
        assert_eq!(json["email"], "josh@josh.com");
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut model = FormModel::new();
        for _ in 0..FOCUS_ORDER.len() {
            model.focus_next();
        }
        assert_eq!(model.focused(), FocusTarget::Input(Field::FirstName));
        model.focus_prev();
        assert_eq!(model.focused(), FocusTarget::Submit);
    }
}
