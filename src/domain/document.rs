//! Grammar validation of substituted workflow text.

use serde_json::Value;

use crate::domain::AppError;

/// Proof that generated text parses as workflow JSON.
///
/// The handle is read-only. The validated text itself is what gets
/// persisted, byte for byte; re-serializing the tree would lose the
/// template's formatting.
#[derive(Debug)]
pub struct WorkflowDocument {
    root: Value,
}

impl WorkflowDocument {
    /// Parse substituted text. Failure carries the parser's position so an
    /// escaping defect points at the exact spot it corrupted.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let root: Value = serde_json::from_str(text).map_err(|err| AppError::ParseFailure {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        })?;
        Ok(Self { root })
    }

    /// Workflow display name, when present.
    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// Number of nodes in the workflow graph.
    pub fn node_count(&self) -> usize {
        self.root.get("nodes").and_then(Value::as_array).map_or(0, Vec::len)
    }

    /// System prompt of the first agent node carrying one.
    pub fn system_message(&self) -> Option<&str> {
        self.root.get("nodes")?.as_array()?.iter().find_map(|node| {
            node.get("parameters")?.get("options")?.get("systemMessage")?.as_str()
        })
    }
}
