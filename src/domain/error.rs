use std::io;

use thiserror::Error;

/// Library-wide error type for ragkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A supplied parameter failed its validation constraint.
    #[error("Invalid {field}: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    /// A required parameter was supplied neither by flag nor params file.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// A required substitution rule matched nothing (fatal in strict mode).
    #[error("Rule '{rule}' matched nothing in template '{template}'")]
    NoMatchFound { rule: &'static str, template: String },

    /// The substituted document is not valid workflow JSON.
    #[error("Generated workflow is not valid JSON (line {line}, column {column}): {reason}")]
    ParseFailure { line: usize, column: usize, reason: String },

    /// Template missing at the requested location.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Params file missing at the requested location.
    #[error("Params file not found: {0}")]
    ParamsFileNotFound(String),

    /// Params file exists but does not hold the expected TOML shape.
    #[error("Malformed params file '{path}': {reason}")]
    MalformedParamsFile { path: String, reason: String },

    /// Prompt file missing at the requested location.
    #[error("Prompt file not found: {0}")]
    PromptFileNotFound(String),
}

impl AppError {
    pub fn invalid_format<S: Into<String>>(field: &'static str, reason: S) -> Self {
        AppError::InvalidFormat { field, reason: reason.into() }
    }
}
