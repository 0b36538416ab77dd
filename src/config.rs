use crate::core::field::Field;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub header: String,
    pub submit_label: String,
    pub first_name: FieldConfig,
    pub last_name: FieldConfig,
    pub email: FieldConfig,
    pub message: FieldConfig,
}

/// On-disk shape: every key optional, layered over [`FormConfig::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawFieldConfig {
    label: Option<String>,
    placeholder: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawFormConfig {
    header: Option<String>,
    submit_label: Option<String>,
    first_name: RawFieldConfig,
    last_name: RawFieldConfig,
    email: RawFieldConfig,
    message: RawFieldConfig,
}

impl FieldConfig {
    fn new(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    // Blank labels keep the default so every input stays findable by label.
    fn merge(&mut self, raw: RawFieldConfig) {
        if let Some(label) = raw.label.filter(|label| !label.trim().is_empty()) {
            self.label = label;
        }
        if let Some(placeholder) = raw.placeholder {
            self.placeholder = placeholder;
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            header: "Contact Form".to_string(),
            submit_label: "Submit".to_string(),
            first_name: FieldConfig::new(Field::FirstName.label(), "Edd"),
            last_name: FieldConfig::new(Field::LastName.label(), "Burke"),
            email: FieldConfig::new(Field::Email.label(), "bluebill1049@hotmail.com"),
            message: FieldConfig::new(Field::Message.label(), ""),
        }
    }
}

impl FormConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawFormConfig = serde_yaml::from_str(raw)?;
        Ok(Self::default().merged(raw))
    }

    pub fn field(&self, field: Field) -> &FieldConfig {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn merged(mut self, raw: RawFormConfig) -> Self {
        if let Some(header) = raw.header {
            self.header = header;
        }
        if let Some(submit_label) = raw.submit_label {
            self.submit_label = submit_label;
        }
        self.first_name.merge(raw.first_name);
        self.last_name.merge(raw.last_name);
        self.email.merge(raw.email);
        self.message.merge(raw.message);
        self
    }
}
