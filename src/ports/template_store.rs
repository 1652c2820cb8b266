use crate::domain::{AppError, TemplateSource};

/// Source of workflow template text.
///
/// The loaded template is an immutable value; stores never observe the
/// substitution that happens downstream.
pub trait TemplateStore {
    fn load(&self) -> Result<TemplateSource, AppError>;
}
