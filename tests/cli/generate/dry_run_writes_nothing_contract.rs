use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dry_run_validates_without_touching_the_filesystem() {
    let ctx = TestContext::new();

    ctx.generate_cmd("acme")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("nothing written"));

    ctx.assert_no_output("acme");
}

#[test]
fn dry_run_still_rejects_invalid_parameters() {
    let ctx = TestContext::new();

    ctx.generate_cmd("Not_Valid")
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid prefix"));
}
