use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{WorkflowSink, WrittenWorkflow};

/// Filesystem sink writing workflow artifacts under an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemWorkflowSink {
    output_dir: PathBuf,
}

impl FilesystemWorkflowSink {
    /// Create a sink for the given output directory. Missing segments are
    /// created at write time; existing ones are untouched.
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Create a sink for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl WorkflowSink for FilesystemWorkflowSink {
    fn write_workflow(&self, file_name: &str, text: &str) -> Result<WrittenWorkflow, AppError> {
        fs::create_dir_all(&self.output_dir)?;

        let destination = self.output_dir.join(file_name);
        // Stage next to the destination so the rename cannot cross
        // filesystems; a failure partway leaves the destination untouched.
        let staging = self.output_dir.join(format!(".{}.tmp", file_name));

        let staged = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&staging)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()
        })();
        if let Err(err) = staged {
            let _ = fs::remove_file(&staging);
            return Err(AppError::Io(err));
        }

        if let Err(err) = fs::rename(&staging, &destination) {
            let _ = fs::remove_file(&staging);
            return Err(AppError::Io(err));
        }

        Ok(WrittenWorkflow { path: destination, bytes: text.len() as u64 })
    }
}
