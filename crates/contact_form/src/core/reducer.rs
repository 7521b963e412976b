//! The reducer: the only place the form model is mutated.
//!
//! `reduce` consumes one action at a time, synchronously, in the order the
//! event loop delivers them. It is side-effect free; anything the runtime
//! should do in response (logging an accepted submission) is signalled via
//! the returned `Effect` list.
//!
//! Policy:
//!   - Errors are recomputed wholesale on every value change and on submit,
//!     never patched.
//!   - A submission snapshot is created or replaced only when validation
//!     passes at submit time; a failed submit leaves any existing snapshot
//!     untouched.
//!   - Runtime actions (Tick, Render, Quit, ...) are ignored here; the event
//!     loop owns them.

use crate::action::Action;

use super::state::{FormModel, Submission};
use super::validate;

/// Instruction to the runtime produced by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Validation passed on submit and the snapshot was (re)placed.
    SubmissionAccepted,
}

/// Apply one action to the model. Unknown / runtime actions are ignored.
pub fn reduce(model: &mut FormModel, action: Action) -> Vec<Effect> {
    match action {
        Action::SetField(field, value) => {
            model.values.set(field, value);
            model.errors = validate::validate(&model.values);
        }
        Action::FocusNext => model.focus_next(),
        Action::FocusPrev => model.focus_prev(),
        Action::Submit => {
            model.errors = validate::validate(&model.values);
            if model.errors.is_empty() {
                model.submission = Some(Submission::snapshot(&model.values));
                return vec![Effect::SubmissionAccepted];
            }
        }
        _ => {}
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::{Field, FocusTarget};
    use crate::core::validate::{EMAIL_INVALID, FIRST_NAME_TOO_SHORT};

    fn filled_model() -> FormModel {
        let mut model = FormModel::new();
        reduce(&mut model, Action::SetField(Field::FirstName, "Joshua".into()));
        reduce(&mut model, Action::SetField(Field::LastName, "Gearheart".into()));
        reduce(&mut model, Action::SetField(Field::Email, "josh@josh.com".into()));
        model
    }

    #[test]
    fn set_field_revalidates_immediately() {
        let mut model = FormModel::new();
        reduce(&mut model, Action::SetField(Field::FirstName, "Josh".into()));
        assert_eq!(
            model.errors.for_field(Field::FirstName),
            Some(FIRST_NAME_TOO_SHORT)
        );

        reduce(&mut model, Action::SetField(Field::FirstName, "Joshua".into()));
        assert_eq!(model.errors.for_field(Field::FirstName), None);
    }

    #[test]
    fn submit_on_empty_form_surfaces_three_errors_and_no_snapshot() {
        let mut model = FormModel::new();
        let effects = reduce(&mut model, Action::Submit);
        assert!(effects.is_empty());
        assert_eq!(model.errors.len(), 3);
        assert!(model.submission.is_none());
    }

    #[test]
    fn submit_without_email_reports_only_the_email_error() {
        let mut model = FormModel::new();
        reduce(&mut model, Action::SetField(Field::FirstName, "Joshua".into()));
        reduce(&mut model, Action::SetField(Field::LastName, "Gearheart".into()));
        let effects = reduce(&mut model, Action::Submit);
        assert!(effects.is_empty());
        assert_eq!(model.errors.ordered(), vec![(Field::Email, EMAIL_INVALID)]);
        assert!(model.submission.is_none());
    }

    #[test]
    fn valid_submit_snapshots_current_values() {
        let mut model = filled_model();
        let effects = reduce(&mut model, Action::Submit);
        assert_eq!(effects, vec![Effect::SubmissionAccepted]);

        let sub = model.submission.as_ref().expect("snapshot");
        assert_eq!(sub.first_name, "Joshua");
        assert_eq!(sub.last_name, "Gearheart");
        assert_eq!(sub.email, "josh@josh.com");
        assert_eq!(sub.message_block(), None);
    }

    #[test]
    fn submitted_message_is_included_when_non_empty() {
        let mut model = filled_model();
        reduce(
            &mut model,
            Action::SetField(Field::Message, "Covid can kick rocks".into()),
        );
        reduce(&mut model, Action::Submit);
        let sub = model.submission.as_ref().expect("snapshot");
        assert_eq!(sub.message_block(), Some("Covid can kick rocks"));
    }

    #[test]
    fn edits_after_submit_do_not_touch_the_snapshot() {
        let mut model = filled_model();
        reduce(&mut model, Action::Submit);
        let before = model.submission.clone();

        reduce(&mut model, Action::SetField(Field::FirstName, "Jo".into()));
        assert_eq!(model.submission, before);
        assert_eq!(
            model.errors.for_field(Field::FirstName),
            Some(FIRST_NAME_TOO_SHORT)
        );
    }

    #[test]
    fn failed_submit_keeps_the_previous_snapshot() {
        let mut model = filled_model();
        reduce(&mut model, Action::Submit);
        let before = model.submission.clone();
        assert!(before.is_some());

        reduce(&mut model, Action::SetField(Field::Email, "josh".into()));
        let effects = reduce(&mut model, Action::Submit);
        assert!(effects.is_empty());
        assert_eq!(model.submission, before);
        assert_eq!(model.errors.for_field(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn resubmitting_identical_values_yields_an_identical_snapshot() {
        let mut model = filled_model();
        reduce(&mut model, Action::Submit);
        let first = model.submission.clone();
        reduce(&mut model, Action::Submit);
        assert_eq!(model.submission, first);
    }

    #[test]
    fn focus_actions_cycle_the_focus_ring() {
        let mut model = FormModel::new();
        assert_eq!(model.focused(), FocusTarget::Input(Field::FirstName));

        reduce(&mut model, Action::FocusNext);
        assert_eq!(model.focused(), FocusTarget::Input(Field::LastName));

        reduce(&mut model, Action::FocusPrev);
        reduce(&mut model, Action::FocusPrev);
        assert_eq!(model.focused(), FocusTarget::Submit);
    }

    #[test]
    fn runtime_actions_are_ignored() {
        let mut model = filled_model();
        reduce(&mut model, Action::Submit);
        let before = model.submission.clone();

        assert!(reduce(&mut model, Action::Tick).is_empty());
        assert!(reduce(&mut model, Action::Render).is_empty());
        assert!(reduce(&mut model, Action::Resize(80, 24)).is_empty());
        assert_eq!(model.submission, before);
    }
}
