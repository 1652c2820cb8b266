use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TemplateSource};
use crate::ports::TemplateStore;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const DEFAULT_TEMPLATE: &str = "rag_workflow.template.json";

/// Template store backed by assets compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn load(&self) -> Result<TemplateSource, AppError> {
        let text = TEMPLATE_DIR
            .get_file(DEFAULT_TEMPLATE)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::TemplateNotFound(DEFAULT_TEMPLATE.to_string()))?;
        Ok(TemplateSource::new(DEFAULT_TEMPLATE, text))
    }
}
