use std::path::PathBuf;

use crate::domain::AppError;

/// Receipt for a persisted workflow artifact.
#[derive(Debug, Clone)]
pub struct WrittenWorkflow {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Destination for generated workflow documents.
pub trait WorkflowSink {
    /// Persist validated workflow text under `file_name`.
    ///
    /// All-or-nothing: on failure the prior state of the destination is
    /// preserved, never a truncated artifact.
    fn write_workflow(&self, file_name: &str, text: &str) -> Result<WrittenWorkflow, AppError>;
}
