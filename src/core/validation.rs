use crate::core::field::Field;
use crate::core::state::FieldValues;
use crate::core::validators::{self, Validator};
use indexmap::IndexMap;

/// Field name to its single current error, in field order.
pub type FieldErrors = IndexMap<Field, String>;

/// The rule chain for one field. An empty chain means the field never errors.
pub fn rules_for(field: Field) -> Vec<Validator> {
    match field {
        Field::FirstName => vec![
            validators::required("firstName is a required field."),
            validators::min_length(5, "firstName must have at least 5 characters."),
        ],
        Field::LastName => vec![validators::required("lastName is a required field.")],
        Field::Email => vec![
            validators::required("email is a required field."),
            validators::email("email must be a valid email address."),
        ],
        Field::Message => Vec::new(),
    }
}

pub fn validate_field(field: Field, value: &str) -> Result<(), String> {
    validators::run_validators(&rules_for(field), value)
}

/// Compute the error map for the given values. Pure in the values only.
pub fn validate_all(values: &FieldValues) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, values.get(field))
                .err()
                .map(|err| (field, err))
        })
        .collect()
}
