use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn inspect_reports_embedded_template_as_healthy() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["inspect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rag_workflow.template.json"))
        .stdout(predicate::str::contains("✅ Template carries every required marker"));
}

#[test]
fn inspect_flags_a_template_missing_required_markers() {
    let ctx = TestContext::new();
    let template = ctx.write_template("bare.json", r#"{"name": "hand edited"}"#);

    ctx.cli()
        .args(["inspect", "--template", template.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("has no occurrence of"));
}

#[test]
fn inspect_reports_a_missing_template_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["inspect", "--template", "no-such-template.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template not found"));
}
