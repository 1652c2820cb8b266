use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ragkit::{AppError, GenerateOptions, RawParams};

#[derive(Parser)]
#[command(name = "ragkit")]
#[command(version)]
#[command(
    about = "Generate client-parameterized n8n RAG workflow definitions",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workflow for a client from the template
    #[clap(visible_alias = "g")]
    Generate {
        /// Client prefix namespacing all generated resource names
        #[arg(short, long)]
        prefix: Option<String>,
        /// Google Drive folder id the ingest pipeline watches
        #[arg(short, long)]
        folder_id: Option<String>,
        /// Agent system prompt text
        #[arg(long, conflicts_with = "prompt_file")]
        prompt: Option<String>,
        /// Read the agent system prompt from a file
        #[arg(long)]
        prompt_file: Option<PathBuf>,
        /// Human-readable workflow name
        #[arg(short = 'n', long)]
        display_name: Option<String>,
        /// Override the template's default chat model
        #[arg(short, long)]
        model: Option<String>,
        /// Read parameters from a TOML file (flags take precedence)
        #[arg(long)]
        params: Option<PathBuf>,
        /// Use a template file instead of the embedded template
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Directory receiving the generated workflow
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        /// Treat a required rule matching nothing as a fatal error
        #[arg(long)]
        strict: bool,
        /// Validate and report without writing the workflow file
        #[arg(long)]
        dry_run: bool,
    },
    /// Check a template for the markers generation relies on
    #[clap(visible_alias = "i")]
    Inspect {
        /// Template file to inspect instead of the embedded template
        #[arg(short, long)]
        template: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate {
            prefix,
            folder_id,
            prompt,
            prompt_file,
            display_name,
            model,
            params,
            template,
            output_dir,
            strict,
            dry_run,
        } => run_generate(
            prefix,
            folder_id,
            prompt,
            prompt_file,
            display_name,
            model,
            params,
            template,
            output_dir,
            strict,
            dry_run,
        ),
        Commands::Inspect { template } => ragkit::inspect(template).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    prefix: Option<String>,
    folder_id: Option<String>,
    prompt: Option<String>,
    prompt_file: Option<PathBuf>,
    display_name: Option<String>,
    model: Option<String>,
    params_file: Option<PathBuf>,
    template: Option<PathBuf>,
    output_dir: PathBuf,
    strict: bool,
    dry_run: bool,
) -> Result<(), AppError> {
    let agent_prompt = match (prompt, prompt_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(read_prompt_file(&path)?),
        (None, None) => None,
    };

    let flags = RawParams {
        prefix,
        folder_id,
        agent_prompt,
        display_name,
        model_id: model,
    };
    let params = match params_file {
        Some(path) => flags.or(RawParams::from_toml_file(&path)?),
        None => flags,
    };

    let options = GenerateOptions { params, strict, dry_run };
    ragkit::generate(options, template, output_dir).map(|_| ())
}

fn read_prompt_file(path: &std::path::Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::PromptFileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
