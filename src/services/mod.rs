//! Adapters implementing the ports against the filesystem and embedded
//! assets.

mod embedded_template_store;
mod file_template_store;
mod workflow_filesystem;

pub use embedded_template_store::EmbeddedTemplateStore;
pub use file_template_store::FileTemplateStore;
pub use workflow_filesystem::FilesystemWorkflowSink;
