use crate::domain::{AppError, TemplateInspection, WorkflowDocument};
use crate::ports::TemplateStore;

/// Result of a template inspection.
#[derive(Debug)]
pub struct InspectOutcome {
    pub template_name: String,
    pub inspection: TemplateInspection,
    /// Whether the raw template already parses as JSON. False is not fatal
    /// for generation (placeholders may occupy positions that only become
    /// valid after substitution) but is worth surfacing.
    pub parses: bool,
}

impl InspectOutcome {
    pub fn is_healthy(&self) -> bool {
        self.inspection.is_healthy()
    }
}

/// Execute the inspect command: report marker occurrence counts for a
/// template so a stale or hand-edited template is caught before generation.
pub fn execute<T: TemplateStore>(templates: &T) -> Result<InspectOutcome, AppError> {
    let template = templates.load()?;
    let inspection = TemplateInspection::of(&template);
    let parses = WorkflowDocument::parse(&template.text).is_ok();

    Ok(InspectOutcome { template_name: template.name, inspection, parses })
}
