use crate::core::field::Field;
use crate::core::validation::{self, FieldErrors};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Values frozen at the moment of a valid submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecord {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
}

impl SubmittedRecord {
    pub(crate) fn capture(values: &FieldValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.as_str())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: FieldValues,
    errors: FieldErrors,
    touched: IndexSet<Field>,
    submit_attempted: bool,
    submitted: Option<SubmittedRecord>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::from_values(FieldValues::default())
    }

    pub fn from_values(values: FieldValues) -> Self {
        let errors = validation::validate_all(&values);
        Self {
            values,
            errors,
            touched: IndexSet::new(),
            submit_attempted: false,
            submitted: None,
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Live validation result for every field, shown or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Errors a user should currently see: edited fields, or every field once
    /// a submit has been attempted.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn visible_errors(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.visible_error(field).map(|err| (field, err)))
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        self.submitted.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.submitted.is_some() {
            Phase::Submitted
        } else {
            Phase::Editing
        }
    }

    pub(crate) fn set_value(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.touched.insert(field);
        self.errors = validation::validate_all(&self.values);
        self.submitted = None;
    }

    /// Returns whether the submit was accepted.
    pub(crate) fn submit(&mut self) -> bool {
        self.submit_attempted = true;
        self.errors = validation::validate_all(&self.values);
        if self.errors.is_empty() {
            self.submitted = Some(SubmittedRecord::capture(&self.values));
            true
        } else {
            self.submitted = None;
            false
        }
    }
}
