//! Template text and the markers the substitution rules target.

/// Placeholder token for the client prefix. A single token covers every
/// derived identifier (tables, query function, index) so a rename can never
/// be partial.
pub const PREFIX_TOKEN: &str = "[PREFIX]";

/// Placeholder token for the Google Drive folder the ingest pipeline watches.
pub const FOLDER_ID_TOKEN: &str = "[GOOGLE_DRIVE_FOLDER_ID]";

/// JSON field holding the agent system prompt.
pub const SYSTEM_MESSAGE_FIELD: &str = "systemMessage";

/// Sentinel default the template ships in the system-prompt field. The
/// field is located by field name plus this value; the field name alone may
/// legitimately appear elsewhere in the document.
pub const SYSTEM_MESSAGE_SENTINEL: &str =
    "You are a helpful assistant for answering questions from the knowledge base.";

/// Default workflow display name in the template.
pub const DEFAULT_DISPLAY_NAME: &str = "RAG Workflow Template";

/// Default chat model identifier in the template.
pub const DEFAULT_MODEL_ID: &str = "gpt-4o-mini";

/// An immutable template as loaded from a store.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// Display name of the source (embedded asset name or file path).
    pub name: String,
    /// Raw template text.
    pub text: String,
}

impl TemplateSource {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        Self { name: name.into(), text: text.into() }
    }

    /// The `"field": "value"` form the scoped system-prompt rule matches.
    pub fn system_message_sentinel_pattern() -> String {
        format!("\"{}\": \"{}\"", SYSTEM_MESSAGE_FIELD, SYSTEM_MESSAGE_SENTINEL)
    }
}

/// Occurrence counts of every marker generation relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInspection {
    pub prefix_tokens: usize,
    pub folder_id_tokens: usize,
    pub system_message_sentinels: usize,
    pub display_name_literals: usize,
    pub model_id_literals: usize,
}

impl TemplateInspection {
    pub fn of(template: &TemplateSource) -> Self {
        let text = &template.text;
        Self {
            prefix_tokens: count_occurrences(text, PREFIX_TOKEN),
            folder_id_tokens: count_occurrences(text, FOLDER_ID_TOKEN),
            system_message_sentinels: count_occurrences(
                text,
                &TemplateSource::system_message_sentinel_pattern(),
            ),
            display_name_literals: count_occurrences(text, DEFAULT_DISPLAY_NAME),
            model_id_literals: count_occurrences(text, DEFAULT_MODEL_ID),
        }
    }

    /// Required markers (everything except the optional model literal) that
    /// the template does not contain at all.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.prefix_tokens == 0 {
            missing.push(PREFIX_TOKEN);
        }
        if self.folder_id_tokens == 0 {
            missing.push(FOLDER_ID_TOKEN);
        }
        if self.system_message_sentinels == 0 {
            missing.push(SYSTEM_MESSAGE_FIELD);
        }
        if self.display_name_literals == 0 {
            missing.push(DEFAULT_DISPLAY_NAME);
        }
        missing
    }

    pub fn is_healthy(&self) -> bool {
        self.missing_required().is_empty()
    }
}

fn count_occurrences(text: &str, pattern: &str) -> usize {
    text.match_indices(pattern).count()
}
