use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

/// Prefixes longer than this still work but make every derived identifier
/// unwieldy, so validation records a warning instead of failing.
pub const PREFIX_RECOMMENDED_MAX: usize = 15;

/// Raw, unvalidated parameter set as collected from CLI flags or a params
/// file. Every entry is optional here; requiredness is enforced by
/// [`ValidatedParams::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawParams {
    pub prefix: Option<String>,
    pub folder_id: Option<String>,
    pub agent_prompt: Option<String>,
    pub display_name: Option<String>,
    pub model_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParamsFile {
    #[serde(default)]
    workflow: RawParams,
}

impl RawParams {
    /// Load raw parameters from the `[workflow]` table of a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<RawParams, AppError> {
        if !path.exists() {
            return Err(AppError::ParamsFileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let file: ParamsFile =
            toml::from_str(&content).map_err(|err| AppError::MalformedParamsFile {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        Ok(file.workflow)
    }

    /// Fill unset entries from `fallback`; entries already present win.
    pub fn or(self, fallback: RawParams) -> RawParams {
        RawParams {
            prefix: self.prefix.or(fallback.prefix),
            folder_id: self.folder_id.or(fallback.folder_id),
            agent_prompt: self.agent_prompt.or(fallback.agent_prompt),
            display_name: self.display_name.or(fallback.display_name),
            model_id: self.model_id.or(fallback.model_id),
        }
    }
}

/// Client prefix namespacing every generated resource identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    /// Parse a prefix: non-empty, starts with a lowercase ASCII letter,
    /// lowercase letters and underscores thereafter.
    pub fn new(value: &str) -> Result<Self, AppError> {
        let starts_with_letter = value.chars().next().is_some_and(|c| c.is_ascii_lowercase());
        let charset_ok = value.chars().all(|c| c.is_ascii_lowercase() || c == '_');
        if !starts_with_letter || !charset_ok {
            return Err(AppError::invalid_format(
                "prefix",
                format!(
                    "'{}' must start with a lowercase letter and contain only lowercase letters and underscores",
                    value
                ),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn exceeds_recommended_length(&self) -> bool {
        self.0.len() > PREFIX_RECOMMENDED_MAX
    }
}

/// Fully validated parameter set. Substitution never sees anything else:
/// construction checks every entry, so a value held here is usable as-is.
#[derive(Debug, Clone)]
pub struct ValidatedParams {
    prefix: Prefix,
    folder_id: String,
    agent_prompt: String,
    display_name: String,
    model_id: Option<String>,
    warnings: Vec<String>,
}

impl ValidatedParams {
    /// Validate a raw parameter set.
    ///
    /// Fails on the first violated constraint; soft findings (an unusually
    /// long prefix) are collected as warnings on the returned value.
    pub fn validate(raw: RawParams) -> Result<Self, AppError> {
        let prefix = Prefix::new(&required(raw.prefix, "prefix")?)?;

        let folder_id = required(raw.folder_id, "folder_id")?;
        if folder_id.contains('"') {
            return Err(AppError::invalid_format(
                "folder_id",
                "must not contain a raw quote character",
            ));
        }

        let agent_prompt = required(raw.agent_prompt, "agent_prompt")?;

        let display_name = required(raw.display_name, "display_name")?;
        single_line(&display_name, "display_name")?;

        let model_id = match raw.model_id {
            Some(model) if model.is_empty() => {
                return Err(AppError::invalid_format("model_id", "must not be empty"));
            }
            Some(model) => {
                single_line(&model, "model_id")?;
                Some(model)
            }
            None => None,
        };

        let mut warnings = Vec::new();
        if prefix.exceeds_recommended_length() {
            warnings.push(format!(
                "prefix '{}' is longer than {} characters; derived identifiers will be unwieldy",
                prefix.as_str(),
                PREFIX_RECOMMENDED_MAX
            ));
        }

        Ok(Self { prefix, folder_id, agent_prompt, display_name, model_id, warnings })
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn folder_id(&self) -> &str {
        &self.folder_id
    }

    pub fn agent_prompt(&self) -> &str {
        &self.agent_prompt
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(AppError::invalid_format(field, "must not be empty")),
        None => Err(AppError::MissingParameter(field)),
    }
}

fn single_line(value: &str, field: &'static str) -> Result<(), AppError> {
    if value.contains('\n') || value.contains('\r') {
        return Err(AppError::invalid_format(field, "must be a single line"));
    }
    Ok(())
}
