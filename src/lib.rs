pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use config::FormConfig;
pub use crate::core::field::Field;
pub use crate::core::reducer::{Action, FormEvent, handle_input, handle_submit, reduce};
pub use crate::core::state::{FieldValues, FormState, Phase, SubmittedRecord};
pub use crate::core::validation;
pub use crate::core::validators;
pub use error::{Error, Result};
pub use ui::render::render;
pub use ui::view::{Matcher, Role, ViewNode, ViewTree};
