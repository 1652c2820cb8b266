//! Identifier conventions derived from the client prefix.
//!
//! The template already carries these exact suffix patterns attached to the
//! prefix token, so generation produces them through the single prefix rule;
//! the helpers here exist for callers and tests that need the derived names
//! without running a substitution.

use crate::domain::params::Prefix;

/// File name of the generated workflow artifact. A pure function of the
/// prefix: same prefix, same destination.
pub fn workflow_file_name(prefix: &Prefix) -> String {
    format!("{}_rag_workflow.json", prefix.as_str())
}

/// Vector table holding embedded document chunks.
pub fn documents_table(prefix: &Prefix) -> String {
    format!("{}_documents", prefix.as_str())
}

/// Table tracking source files and their ingest state.
pub fn document_metadata_table(prefix: &Prefix) -> String {
    format!("{}_document_metadata", prefix.as_str())
}

/// Chat memory table used by the agent.
pub fn chat_histories_table(prefix: &Prefix) -> String {
    format!("{}_n8n_chat_histories", prefix.as_str())
}

/// Similarity-search function over the documents table.
pub fn match_function(prefix: &Prefix) -> String {
    format!("match_{}_documents", prefix.as_str())
}

/// Vector index on the documents table.
pub fn embedding_index(prefix: &Prefix) -> String {
    format!("{}_documents_embedding_idx", prefix.as_str())
}
