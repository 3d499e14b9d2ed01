//! Error taxonomy for the normalization layer.
//!
//! Only contract violations are errors. Missing optional fields, unmatched
//! sections and unclassified contact items degrade to empty values inside the
//! normalizers and never reach this type.

use thiserror::Error;

pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The payload is not the container type the normalizer requires.
    #[error("invalid input: expected {expected}, found {found}")]
    InvalidInput {
        expected: &'static str,
        found: String,
    },
    #[error("config error: {0}")]
    Config(String),
}

impl NormalizeError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    pub(crate) fn invalid_input(expected: &'static str, found: &serde_json::Value) -> Self {
        Self::InvalidInput {
            expected,
            found: json_kind(found).to_string(),
        }
    }
}

impl From<regex::Error> for NormalizeError {
    fn from(value: regex::Error) -> Self {
        Self::Config(value.to_string())
    }
}

/// Short JSON type name used in error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
