use crate::harness::{FOLDER_ID, TestContext};
use predicates::prelude::*;

#[test]
fn generate_rejects_an_empty_prompt_with_no_artifact() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "generate",
            "--prefix",
            "ttolman",
            "--folder-id",
            FOLDER_ID,
            "--prompt",
            "",
            "--display-name",
            "Test RAG",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid agent_prompt"));

    ctx.assert_no_output("ttolman");
}

#[test]
fn generate_rejects_a_quoted_folder_id() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "generate",
            "--prefix",
            "ttolman",
            "--folder-id",
            "bad\"id",
            "--prompt",
            "Be helpful.",
            "--display-name",
            "Test RAG",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid folder_id"));

    ctx.assert_no_output("ttolman");
}
