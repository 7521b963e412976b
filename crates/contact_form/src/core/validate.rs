//! Validation rules for the contact form.
//!
//! `validate` is a pure function from the current `FieldValues` to
//! `ValidationErrors`; it is re-run wholesale on every change and on submit,
//! never patched incrementally. The message field carries no rule, which the
//! error type encodes by simply having no slot for it.

use email_address::EmailAddress;

use super::state::{Field, FieldValues};

pub const FIRST_NAME_TOO_SHORT: &str = "firstName must have at least 5 characters.";
pub const LAST_NAME_REQUIRED: &str = "lastName is a required field.";
pub const EMAIL_INVALID: &str = "email must be a valid email address.";

/// Minimum firstName length, counted in characters (not bytes).
const FIRST_NAME_MIN_CHARS: usize = 5;

/// Fixed display order when several fields fail at once.
const DISPLAY_ORDER: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

/// Per-field validation findings. A `None` slot means the field is currently
/// valid; only firstName, lastName and email can ever fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }

    pub fn len(&self) -> usize {
        [&self.first_name, &self.last_name, &self.email]
            .into_iter()
            .filter(|e| e.is_some())
            .count()
    }

    /// The error for one field, if any. Message has no rule and therefore
    /// never reports one.
    pub fn for_field(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::LastName => self.last_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => None,
        }
    }

    /// All present errors in the fixed display order
    /// [firstName, lastName, email], independent of evaluation order.
    pub fn ordered(&self) -> Vec<(Field, &str)> {
        DISPLAY_ORDER
            .into_iter()
            .filter_map(|field| self.for_field(field).map(|msg| (field, msg)))
            .collect()
    }
}

/// Evaluate all rules against the current values. Side-effect free.
pub fn validate(values: &FieldValues) -> ValidationErrors {
    ValidationErrors {
        first_name: first_name_error(&values.first_name),
        last_name: last_name_error(&values.last_name),
        email: email_error(&values.email),
    }
}

fn first_name_error(value: &str) -> Option<String> {
    if value.chars().count() < FIRST_NAME_MIN_CHARS {
        Some(FIRST_NAME_TOO_SHORT.to_string())
    } else {
        None
    }
}

fn last_name_error(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(LAST_NAME_REQUIRED.to_string())
    } else {
        None
    }
}

/// Required field; an empty value reports the same message as a malformed
/// one. Address validity is delegated to the `email_address` crate instead
/// of a hand-rolled pattern.
fn email_error(value: &str) -> Option<String> {
    if value.is_empty() || !EmailAddress::is_valid(value) {
        Some(EMAIL_INVALID.to_string())
    } else {
        None
    }
}
