//! Domain logic: parameter validation, escaping, substitution, validation,
//! and naming conventions. Nothing here touches the filesystem.

pub mod document;
pub mod error;
pub mod escape;
pub mod naming;
pub mod params;
pub mod substitute;
pub mod template;

pub use document::WorkflowDocument;
pub use error::AppError;
pub use params::{Prefix, RawParams, ValidatedParams};
pub use substitute::{ReplacementReport, Rule, RuleOutcome};
pub use template::{TemplateInspection, TemplateSource};
