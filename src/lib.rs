//! ragkit: Generate client-parameterized n8n RAG workflow definitions.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::PathBuf;

use app::AppContext;
use app::commands::{generate, inspect};
use ports::TemplateStore;
use services::{EmbeddedTemplateStore, FileTemplateStore, FilesystemWorkflowSink};

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use app::commands::inspect::InspectOutcome;
pub use domain::{AppError, RawParams};

/// Generate a parameterized workflow and write it under `output_dir`.
///
/// Uses the embedded template unless `template_path` overrides it. Prints
/// warnings and a success line; the returned outcome carries the same data
/// for programmatic callers.
pub fn generate(
    options: GenerateOptions,
    template_path: Option<PathBuf>,
    output_dir: PathBuf,
) -> Result<GenerateOutcome, AppError> {
    let sink = FilesystemWorkflowSink::new(output_dir);
    let outcome = match template_path {
        Some(path) => {
            generate::execute(&AppContext::new(FileTemplateStore::new(path), sink), options)?
        }
        None => generate::execute(&AppContext::new(EmbeddedTemplateStore::new(), sink), options)?,
    };

    for warning in &outcome.warnings {
        eprintln!("⚠️  {warning}");
    }
    match &outcome.path {
        Some(path) => println!(
            "✅ Generated {} ({} bytes, {} nodes)",
            path.display(),
            outcome.bytes,
            outcome.node_count
        ),
        None => println!(
            "✅ Dry run: workflow is valid ({} bytes, {} nodes); nothing written",
            outcome.bytes, outcome.node_count
        ),
    }
    Ok(outcome)
}

/// Inspect a template and report the markers generation relies on.
pub fn inspect(template_path: Option<PathBuf>) -> Result<InspectOutcome, AppError> {
    let outcome = match template_path {
        Some(path) => inspect::execute(&FileTemplateStore::new(path))?,
        None => inspect::execute(&EmbeddedTemplateStore::new())?,
    };

    println!("Template: {}", outcome.template_name);
    println!("  prefix tokens:            {}", outcome.inspection.prefix_tokens);
    println!("  folder id tokens:         {}", outcome.inspection.folder_id_tokens);
    println!("  system message sentinels: {}", outcome.inspection.system_message_sentinels);
    println!("  display name literals:    {}", outcome.inspection.display_name_literals);
    println!("  model id literals:        {}", outcome.inspection.model_id_literals);

    if !outcome.parses {
        eprintln!("⚠️  template does not parse as JSON before substitution");
    }
    for marker in outcome.inspection.missing_required() {
        eprintln!("⚠️  template has no occurrence of '{marker}'");
    }
    if outcome.is_healthy() {
        println!("✅ Template carries every required marker");
    }

    Ok(outcome)
}

/// Load a template through the same stores the commands use. Exposed for
/// hosting systems that cache template text as a read-through cache.
pub fn load_template(template_path: Option<PathBuf>) -> Result<domain::TemplateSource, AppError> {
    match template_path {
        Some(path) => FileTemplateStore::new(path).load(),
        None => EmbeddedTemplateStore::new().load(),
    }
}
