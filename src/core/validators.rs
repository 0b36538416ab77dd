use regex::Regex;
use std::sync::LazyLock;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Apply `validators` in order; the first failure is the field's error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    validators.iter().try_for_each(|validator| validator(value))
}

/// A value is present as soon as it holds any character, whitespace included.
pub fn required(message: impl Into<String>) -> Validator {
    custom(|value| !value.is_empty(), message)
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    custom(move |value| value.chars().count() >= min_len, message)
}

/// `local@domain.tld`, matched against the value exactly as entered.
pub fn email(message: impl Into<String>) -> Validator {
    custom(|value| EMAIL_PATTERN.is_match(value), message)
}

pub fn custom<F>(accepts: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Box::new(move |value: &str| {
        if accepts(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}
