//! Error types for entity template construction
//!
//! The plain template builder never fails. Errors only arise at the edges:
//! opt-in input validation, configuration loading and SPARQL result parsing.

use thiserror::Error;

/// Result alias used throughout the crate
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Main error type for template construction
#[derive(Error, Debug)]
pub enum TemplateError {
    /// An input field was rejected by boundary validation.
    ///
    /// Distinct from any failure of the downstream ingestion system, which
    /// this crate never talks to.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed SPARQL results: {0}")]
    MalformedResults(String),
}

impl TemplateError {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is an input error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Check if this error was raised by input validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
