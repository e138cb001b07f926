//! Integration tests for policy preparation and per-document evaluation.

use wfguard_policy::{Evaluate, Policy, PolicyError, PreparedQuery};
use wfguard_types::{Document, Mapping, RepoPath, Value};

const CHECKOUT_POLICY: &str = r#"package main

import rego.v1

deny contains msg if {
	some job_name, job in input.jobs
	some step in job.steps
	step.uses == "actions/checkout@v2"
	msg := sprintf("job '%s' uses actions/checkout@v2", [job_name])
}
"#;

const BOOLEAN_POLICY: &str = r#"package main

import rego.v1

default deny := false

deny if {
	some job in input.jobs
	some step in job.steps
	step.uses == "actions/checkout@v2"
}
"#;

fn policy(text: &str) -> Policy {
    Policy {
        name: "test.rego".to_string(),
        text: text.to_string(),
    }
}

fn prepare(text: &str) -> PreparedQuery {
    PreparedQuery::prepare(&policy(text), "data.main.deny").expect("prepare")
}

fn document(path: &str, json: serde_json::Value) -> Document {
    let root: Mapping = match Value::from(json) {
        Value::Mapping(m) => m,
        other => panic!("expected mapping, got {other:?}"),
    };
    Document::new(RepoPath::new(path), root)
}

fn workflow(uses: &[(&str, &str)]) -> Document {
    let json = serde_json::json!({
        "name": "ci",
        "on": "push",
        "jobs": uses
            .iter()
            .map(|(job, action)| {
                (
                    job.to_string(),
                    serde_json::json!({"runs-on": "ubuntu-latest", "steps": [{"uses": action}]}),
                )
            })
            .collect::<serde_json::Map<_, _>>(),
    });
    document("ci.yml", json)
}

fn messages(set: &wfguard_types::ResultSet) -> Vec<String> {
    set.values()
        .filter_map(Value::as_sequence)
        .flatten()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[test]
fn forbidden_action_yields_deny_message() {
    let prepared = prepare(CHECKOUT_POLICY);
    let set = prepared
        .evaluate(&workflow(&[("build", "actions/checkout@v2")]))
        .expect("evaluate");
    assert_eq!(
        messages(&set),
        vec!["job 'build' uses actions/checkout@v2".to_string()]
    );
}

#[test]
fn allowed_action_yields_no_messages() {
    let prepared = prepare(CHECKOUT_POLICY);
    let set = prepared
        .evaluate(&workflow(&[("build", "actions/checkout@v3")]))
        .expect("evaluate");
    assert!(messages(&set).is_empty());
}

#[test]
fn document_without_jobs_yields_no_messages() {
    let prepared = prepare(CHECKOUT_POLICY);
    let doc = Document::new(RepoPath::new("empty.yml"), Mapping::new());
    let set = prepared.evaluate(&doc).expect("evaluate");
    assert!(messages(&set).is_empty());
}

#[test]
fn evaluations_are_independent() {
    let prepared = prepare(CHECKOUT_POLICY);
    let bad = workflow(&[("lint", "actions/checkout@v2")]);
    let good = workflow(&[("lint", "actions/checkout@v4")]);

    assert_eq!(messages(&prepared.evaluate(&bad).expect("bad")).len(), 1);
    assert!(messages(&prepared.evaluate(&good).expect("good")).is_empty());
    assert_eq!(messages(&prepared.evaluate(&bad).expect("bad again")).len(), 1);
}

#[test]
fn boolean_rule_yields_true_or_false() {
    let prepared = prepare(BOOLEAN_POLICY);

    let flagged = prepared
        .evaluate(&workflow(&[("build", "actions/checkout@v2")]))
        .expect("evaluate");
    assert!(flagged.values().any(|v| v.as_bool() == Some(true)));

    let clean = prepared
        .evaluate(&workflow(&[("build", "actions/checkout@v4")]))
        .expect("evaluate");
    assert!(!clean.values().any(|v| v.as_bool() == Some(true)));
}

#[test]
fn embedded_policy_prepares_and_flags_checkout_v2() {
    let prepared = PreparedQuery::prepare(&Policy::embedded(), "data.main.deny").expect("prepare");
    assert_eq!(prepared.policy_name(), "embedded.rego");
    let set = prepared
        .evaluate(&workflow(&[("build", "actions/checkout@v2")]))
        .expect("evaluate");
    assert_eq!(messages(&set).len(), 1);
}

#[test]
fn syntax_error_fails_preparation() {
    let broken = policy("package main\n\ndeny contains {\n");
    let err = PreparedQuery::prepare(&broken, "data.main.deny")
        .err()
        .expect("prepare should fail");
    assert!(matches!(err, PolicyError::Prepare { .. }), "{err}");
    assert!(err.to_string().contains("test.rego"));
}

#[test]
fn empty_query_is_rejected() {
    let err = PreparedQuery::prepare(&policy(CHECKOUT_POLICY), "   ")
        .err()
        .expect("prepare should fail");
    assert!(matches!(err, PolicyError::EmptyQuery));
}

const TIMEOUT_POLICY: &str = r#"package main

import rego.v1

deny contains msg if {
	v := to_number(object.get(input, "timeout", "unset"))
	v > 30
	msg := sprintf("timeout %v is over 30", [v])
}
"#;

#[test]
fn failing_builtin_makes_the_rule_not_fire() {
    let prepared = prepare(TIMEOUT_POLICY);

    let unset = document("a.yml", serde_json::json!({"name": "a"}));
    let set = prepared.evaluate(&unset).expect("builtin failure is not an error");
    assert!(messages(&set).is_empty());

    let bad_value = document("b.yml", serde_json::json!({"timeout": "soon"}));
    let set = prepared.evaluate(&bad_value).expect("builtin failure is not an error");
    assert!(messages(&set).is_empty());

    let slow = document("c.yml", serde_json::json!({"timeout": "45"}));
    let set = prepared.evaluate(&slow).expect("evaluate");
    assert_eq!(messages(&set).len(), 1);
}

const CONFLICT_POLICY: &str = r#"package main

import rego.v1

mode := "a" if input.flag == true

mode := "b" if input.flag == true

deny contains "conflicting mode" if mode == "a"
"#;

#[test]
fn input_dependent_runtime_error_belongs_to_the_document() {
    let prepared = prepare(CONFLICT_POLICY);

    let quiet = document("quiet.yml", serde_json::json!({"flag": false}));
    let set = prepared.evaluate(&quiet).expect("no conflict without the flag");
    assert!(messages(&set).is_empty());

    let loud = document("loud.yml", serde_json::json!({"flag": true}));
    let err = prepared.evaluate(&loud).expect_err("conflict is an evaluation error");
    assert!(matches!(err, PolicyError::Evaluate { .. }), "{err}");
}
