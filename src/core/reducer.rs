use crate::core::field::Field;
use crate::core::state::FormState;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Input { field: Field, value: String },
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged { field: Field },
    SubmitAccepted,
    SubmitRejected { failing: Vec<Field> },
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut FormState, action: Action) -> FormEvent {
        match action {
            Action::Input { field, value } => {
                state.set_value(field, value);
                debug!(
                    field = field.name(),
                    len = state.value(field).chars().count(),
                    error = state.error(field),
                    "field updated"
                );
                FormEvent::InputChanged { field }
            }
            Action::Submit => {
                if state.submit() {
                    info!("contact form submitted");
                    FormEvent::SubmitAccepted
                } else {
                    let failing: Vec<Field> = state.errors().keys().copied().collect();
                    debug!(count = failing.len(), ?failing, "submit rejected");
                    FormEvent::SubmitRejected { failing }
                }
            }
        }
    }
}

pub fn reduce(mut state: FormState, action: Action) -> FormState {
    Reducer::reduce(&mut state, action);
    state
}

pub fn handle_input(state: FormState, field: Field, value: impl Into<String>) -> FormState {
    reduce(
        state,
        Action::Input {
            field,
            value: value.into(),
        },
    )
}

pub fn handle_submit(state: FormState) -> FormState {
    reduce(state, Action::Submit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;

    #[test]
    fn rejected_submit_lists_failing_fields_in_order() {
        let mut state = FormState::new();
        let event = Reducer::reduce(&mut state, Action::Submit);
        assert_eq!(
            event,
            FormEvent::SubmitRejected {
                failing: vec![Field::FirstName, Field::LastName, Field::Email]
            }
        );
    }

    #[test]
    fn accepted_submit_freezes_values() {
        let state = FormState::new();
        let state = handle_input(state, Field::FirstName, "test1");
        let state = handle_input(state, Field::LastName, "test2");
        let state = handle_input(state, Field::Email, "test@test.com");
        let state = handle_submit(state);

        assert_eq!(state.phase(), Phase::Submitted);
        let record = state.submitted().expect("submitted");
        assert_eq!(record.first_name(), "test1");
        assert_eq!(record.last_name(), "test2");
        assert_eq!(record.email(), "test@test.com");
        assert_eq!(record.message(), None);
    }

    #[test]
    fn resubmit_after_failure_succeeds_once_fixed() {
        let state = handle_input(FormState::new(), Field::FirstName, "shariq");
        let state = handle_input(state, Field::LastName, "alberto");
        let state = handle_submit(state);
        assert!(state.submitted().is_none());
        assert_eq!(state.visible_errors().count(), 1);

        let state = handle_input(state, Field::Email, "shariq@example.com");
        let state = handle_submit(state);
        assert!(state.submitted().is_some());
        assert_eq!(state.visible_errors().count(), 0);
    }

    #[test]
    fn whitespace_first_name_shows_length_error() {
        let state = handle_input(FormState::new(), Field::FirstName, "  ");
        assert_eq!(state.value(Field::FirstName), "  ");
        assert_eq!(
            state.visible_error(Field::FirstName),
            Some("firstName must have at least 5 characters.")
        );
    }
}
