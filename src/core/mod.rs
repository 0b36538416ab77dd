pub mod field;
pub mod reducer;
pub mod state;
pub mod validation;
pub mod validators;

pub use field::Field;
pub use reducer::{Action, FormEvent, Reducer, handle_input, handle_submit, reduce};
pub use state::{FieldValues, FormState, Phase, SubmittedRecord};
pub use validation::FieldErrors;
