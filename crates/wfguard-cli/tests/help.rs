use assert_cmd::Command;

/// Helper to get a Command for the wfguard binary.
#[allow(deprecated)]
fn wfguard_cmd() -> Command {
    Command::cargo_bin("wfguard").unwrap()
}

#[test]
fn help_works() {
    wfguard_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_lists_policy_flags() {
    wfguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("--builtin-policy"))
        .stdout(predicates::str::contains("--on-eval-error"));
}

#[test]
fn policy_prints_embedded_policy() {
    wfguard_cmd()
        .arg("policy")
        .assert()
        .success()
        .stdout(predicates::str::contains("package main"))
        .stdout(predicates::str::contains("actions/checkout@v2"));
}
