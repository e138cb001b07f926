//! Integration tests for workflow discovery against the shared fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use wfguard_repo::{discover_workflow_files, load_documents};

/// Repo root / tests / fixtures.
fn fixtures_dir() -> Utf8PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/wfguard-repo -> crates -> repo root
    let repo_root = manifest_dir
        .parent()
        .expect("wfguard-repo should have parent (crates)")
        .parent()
        .expect("crates should have parent (repo root)");
    Utf8PathBuf::from_path_buf(repo_root.join("tests").join("fixtures"))
        .expect("fixture path should be valid UTF-8")
}

fn workflows() -> &'static Utf8Path {
    Utf8Path::new(".github/workflows")
}

#[test]
fn checkout_scenario_discovers_both_extensions_and_skips_markdown() {
    let root = fixtures_dir().join("checkout_scenario");

    let files = discover_workflow_files(&root, workflows(), &[]).expect("discovery");
    let actual: Vec<&str> = files.iter().map(|p| p.as_str()).collect();

    assert_eq!(
        actual,
        vec![".github/workflows/a.yaml", ".github/workflows/b.yaml"]
    );
}

#[test]
fn discovery_is_stable_across_runs() {
    let root = fixtures_dir().join("duplicates");

    let first = discover_workflow_files(&root, workflows(), &[]).expect("discovery");
    let second = discover_workflow_files(&root, workflows(), &[]).expect("discovery");
    assert_eq!(first, second);
}

#[test]
fn loaded_documents_expose_nested_workflow_structure() {
    let root = fixtures_dir().join("checkout_scenario");

    let docs = load_documents(&root, workflows(), &[]).expect("load");
    assert_eq!(docs.len(), 2);

    let uses = docs[0]
        .get("jobs")
        .and_then(|jobs| jobs.lookup(&["build", "steps"]))
        .and_then(|steps| steps.as_sequence())
        .and_then(|steps| steps.first())
        .and_then(|step| step.get("uses"))
        .and_then(|v| v.as_str());
    assert_eq!(uses, Some("actions/checkout@v2"));
}

#[test]
fn malformed_fixture_fails_the_whole_load() {
    let root = fixtures_dir().join("malformed_yaml");

    let err = load_documents(&root, workflows(), &[]).unwrap_err();
    assert!(err.to_string().contains("b.yml"), "{err}");
}
