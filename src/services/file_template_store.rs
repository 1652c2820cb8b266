use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, TemplateSource};
use crate::ports::TemplateStore;

/// Template store reading a caller-supplied file, used when the embedded
/// template is overridden.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    path: PathBuf,
}

impl FileTemplateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TemplateStore for FileTemplateStore {
    fn load(&self) -> Result<TemplateSource, AppError> {
        if !self.path.exists() {
            return Err(AppError::TemplateNotFound(self.path.display().to_string()));
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(TemplateSource::new(self.path.display().to_string(), text))
    }
}
