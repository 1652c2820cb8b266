//! Shared testing harness for `ragkit` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample folder id used across scenarios.
pub(crate) const FOLDER_ID: &str = "1m2hXNeJQDxVGRmnHAW6oDgVRGOxbNESO";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ragkit` binary within the
    /// default workspace.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ragkit").expect("Failed to locate ragkit binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Build a `generate` command pre-filled with valid scenario arguments.
    pub(crate) fn generate_cmd(&self, prefix: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "generate",
            "--prefix",
            prefix,
            "--folder-id",
            FOLDER_ID,
            "--prompt",
            "Line1\nLine2 \"quoted\"",
            "--display-name",
            "Test RAG",
        ]);
        cmd
    }

    /// Write a template file into the work directory and return its path.
    pub(crate) fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test template");
        path
    }

    /// Deterministic output path for a prefix, relative to the work dir.
    pub(crate) fn output_path(&self, prefix: &str) -> PathBuf {
        self.work_dir.join(format!("{}_rag_workflow.json", prefix))
    }

    /// Read the generated workflow for a prefix.
    pub(crate) fn read_output(&self, prefix: &str) -> String {
        fs::read_to_string(self.output_path(prefix)).expect("Failed to read generated workflow")
    }

    /// Assert that no workflow artifact exists for a prefix.
    pub(crate) fn assert_no_output(&self, prefix: &str) {
        assert!(
            !self.output_path(prefix).exists(),
            "no workflow should be written for prefix '{}'",
            prefix
        );
    }

    /// A minimal template carrying every marker, for tests that need to
    /// mutate template content.
    pub(crate) fn minimal_template() -> String {
        concat!(
            "{\n",
            "  \"name\": \"RAG Workflow Template\",\n",
            "  \"nodes\": [\n",
            "    {\"parameters\": {\"tableName\": \"[PREFIX]_documents\", \"queryName\": \"match_[PREFIX]_documents\"}},\n",
            "    {\"parameters\": {\"folderToWatch\": \"[GOOGLE_DRIVE_FOLDER_ID]\"}},\n",
            "    {\"parameters\": {\"options\": {\"systemMessage\": \"You are a helpful assistant for answering questions from the knowledge base.\"}}},\n",
            "    {\"parameters\": {\"model\": \"gpt-4o-mini\"}}\n",
            "  ]\n",
            "}\n"
        )
        .to_string()
    }
}
