use crate::harness::{FOLDER_ID, TestContext};
use predicates::prelude::*;

#[test]
fn generate_produces_a_valid_parameterized_workflow() {
    let ctx = TestContext::new();

    ctx.generate_cmd("ttolman")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Generated"))
        .stdout(predicate::str::contains("ttolman_rag_workflow.json"));

    let output = ctx.read_output("ttolman");

    // Every derived identifier comes from the single prefix rule.
    assert!(output.contains("ttolman_documents"));
    assert!(output.contains("ttolman_document_metadata"));
    assert!(output.contains("ttolman_n8n_chat_histories"));
    assert!(output.contains("match_ttolman_documents"));
    assert!(output.contains("ttolman_documents_embedding_idx"));
    assert!(output.contains(FOLDER_ID));

    // No placeholder leakage.
    assert!(!output.contains("[PREFIX]"));
    assert!(!output.contains("[GOOGLE_DRIVE_FOLDER_ID]"));

    // The multi-line prompt landed escaped inside the system message field.
    assert!(output.contains(r#""systemMessage": "Line1\nLine2 \"quoted\"""#));

    // The artifact parses, and the prompt round-trips through the parser.
    let document: serde_json::Value = serde_json::from_str(&output).expect("output should parse");
    assert_eq!(document["name"], "Test RAG");
    let system_message = document["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find_map(|node| node["parameters"]["options"]["systemMessage"].as_str())
        .expect("agent node should carry the system message");
    assert_eq!(system_message, "Line1\nLine2 \"quoted\"");
}

#[test]
fn generate_supports_model_override() {
    let ctx = TestContext::new();

    ctx.generate_cmd("acme").args(["--model", "gpt-4.1"]).assert().success();

    let output = ctx.read_output("acme");
    assert!(output.contains("gpt-4.1"));
    assert!(!output.contains("gpt-4o-mini"));
}

#[test]
fn generate_without_model_keeps_template_default() {
    let ctx = TestContext::new();

    ctx.generate_cmd("acme").assert().success();

    assert!(ctx.read_output("acme").contains("gpt-4o-mini"));
}

#[test]
fn generate_is_deterministic_for_identical_inputs() {
    let ctx = TestContext::new();

    ctx.generate_cmd("acme").assert().success();
    let first = ctx.read_output("acme");

    ctx.generate_cmd("acme").assert().success();
    let second = ctx.read_output("acme");

    assert_eq!(first, second);
}

#[test]
fn generate_writes_into_missing_output_directory() {
    let ctx = TestContext::new();

    ctx.generate_cmd("acme").args(["--output-dir", "out/workflows"]).assert().success();

    let path = ctx.work_dir().join("out/workflows/acme_rag_workflow.json");
    assert!(path.exists(), "output directory should be created on demand");
}

#[test]
fn generate_reads_prompt_from_file() {
    let ctx = TestContext::new();
    let prompt_path = ctx.write_template("prompt.txt", "From a file\nwith two lines");

    let mut cmd = ctx.cli();
    cmd.args([
        "generate",
        "--prefix",
        "acme",
        "--folder-id",
        FOLDER_ID,
        "--prompt-file",
        prompt_path.to_str().unwrap(),
        "--display-name",
        "Acme RAG",
    ]);
    cmd.assert().success();

    assert!(ctx.read_output("acme").contains(r#""systemMessage": "From a file\nwith two lines""#));
}

#[test]
fn generate_warns_on_long_prefix() {
    let ctx = TestContext::new();

    ctx.generate_cmd("very_long_client_prefix")
        .assert()
        .success()
        .stderr(predicate::str::contains("longer than 15"));

    assert!(ctx.output_path("very_long_client_prefix").exists());
}
