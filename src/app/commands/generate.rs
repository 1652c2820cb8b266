use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, RawParams, ReplacementReport, ValidatedParams, WorkflowDocument, escape, naming,
    substitute,
};
use crate::ports::{TemplateStore, WorkflowSink};

/// Options for a single generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub params: RawParams,
    /// Escalate a required rule matching nothing to a fatal error.
    pub strict: bool,
    /// Run the full pipeline through validation but write nothing.
    pub dry_run: bool,
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Destination of the written artifact; `None` on a dry run.
    pub path: Option<PathBuf>,
    pub bytes: u64,
    pub node_count: usize,
    pub report: ReplacementReport,
    pub warnings: Vec<String>,
}

/// Execute the generate command.
///
/// The pipeline is strictly linear: validate parameters, load the template,
/// escape the prompt, substitute, parse, write. The first failing stage
/// aborts with nothing written.
pub fn execute<T, S>(
    ctx: &AppContext<T, S>,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    T: TemplateStore,
    S: WorkflowSink,
{
    // Parameters are checked before the template is even loaded; a bad
    // prefix must fail the same way whether or not the template exists.
    let params = ValidatedParams::validate(options.params)?;

    let template = ctx.templates().load()?;

    let escaped_prompt = escape::escape_json_string(params.agent_prompt());
    let (text, report) = substitute::substitute(&template, &params, &escaped_prompt);

    let mut warnings = params.warnings().to_vec();
    for rule in report.missed_rules() {
        if options.strict {
            return Err(AppError::NoMatchFound {
                rule: rule.name(),
                template: template.name.clone(),
            });
        }
        warnings.push(format!(
            "rule '{}' matched nothing in template '{}'; the template may be stale",
            rule.name(),
            template.name
        ));
    }

    let document = WorkflowDocument::parse(&text)?;
    let node_count = document.node_count();

    if options.dry_run {
        return Ok(GenerateOutcome {
            path: None,
            bytes: text.len() as u64,
            node_count,
            report,
            warnings,
        });
    }

    let file_name = naming::workflow_file_name(params.prefix());
    let written = ctx.sink().write_workflow(&file_name, &text)?;

    Ok(GenerateOutcome {
        path: Some(written.path),
        bytes: written.bytes,
        node_count,
        report,
        warnings,
    })
}
