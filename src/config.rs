//! Template builder configuration
//!
//! Loaded from YAML, e.g.:
//!
//! ```yaml
//! validation: strict
//! include_homepage: false
//! ```

use std::env::VarError;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};
use crate::validation::ValidationMode;

/// Environment variable selecting the validation mode
pub const VALIDATION_ENV: &str = "EVENT_SERIES_VALIDATION";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub validation: ValidationMode,

    /// Emit a P856 claim when the input carries a homepage
    #[serde(default = "default_include_homepage")]
    pub include_homepage: bool,
}

fn default_include_homepage() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::default(),
            include_homepage: default_include_homepage(),
        }
    }
}

impl TemplateConfig {
    /// Config with the given validation mode
    pub fn with_validation(validation: ValidationMode) -> Self {
        Self {
            validation,
            ..Default::default()
        }
    }

    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> TemplateResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> TemplateResult<Self> {
        let config: TemplateConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Build configuration from the environment
    ///
    /// An unset variable means the default mode; an unknown or non-UTF-8
    /// value is an error.
    pub fn from_env() -> TemplateResult<Self> {
        match std::env::var(VALIDATION_ENV) {
            Ok(value) => Self::from_env_value(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(value)) => Err(TemplateError::Config(format!(
                "{} is not valid UTF-8 (got {:?})",
                VALIDATION_ENV, value
            ))),
        }
    }

    fn from_env_value(value: &str) -> TemplateResult<Self> {
        let validation = ValidationMode::parse(value).ok_or_else(|| {
            TemplateError::Config(format!(
                "{} must be one of lenient, strict, schema (got '{}')",
                VALIDATION_ENV, value
            ))
        })?;
        Ok(Self::with_validation(validation))
    }
}
