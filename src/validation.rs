//! Boundary validation for event series input
//!
//! Title and inception feed mandatory claims (P1476, P571). Validation is
//! opt-in; the default mode passes everything through.

use serde::{Deserialize, Serialize};

use crate::builder::EventSeriesInput;
use crate::error::{TemplateError, TemplateResult};
use crate::time::is_wikibase_time;

/// How strictly input is checked before templating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Pass every value through unexamined
    #[default]
    Lenient,
    /// Reject empty title or inception
    Strict,
    /// Strict, plus inception must be a Wikibase time string
    Schema,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Lenient => "lenient",
            ValidationMode::Strict => "strict",
            ValidationMode::Schema => "schema",
        }
    }

    /// Parse a mode name (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(ValidationMode::Lenient),
            "strict" => Some(ValidationMode::Strict),
            "schema" => Some(ValidationMode::Schema),
            _ => None,
        }
    }

    /// Validate input under this mode
    pub fn check(&self, input: &EventSeriesInput) -> TemplateResult<()> {
        match self {
            ValidationMode::Lenient => Ok(()),
            ValidationMode::Strict => check_required(input),
            ValidationMode::Schema => {
                check_required(input)?;
                if !is_wikibase_time(&input.inception) {
                    return Err(TemplateError::invalid_input(
                        "inception",
                        format!(
                            "'{}' is not a Wikibase time (expected e.g. +2017-00-00T00:00:00Z)",
                            input.inception
                        ),
                    ));
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn check_required(input: &EventSeriesInput) -> TemplateResult<()> {
    if input.title.trim().is_empty() {
        return Err(TemplateError::invalid_input("title", "must not be empty"));
    }
    if input.inception.trim().is_empty() {
        return Err(TemplateError::invalid_input("inception", "must not be empty"));
    }
    Ok(())
}
