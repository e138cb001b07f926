//! Fuzz target for result-set processing.
//!
//! Goal: processing arbitrary result values never panics, and no message is
//! ever reported twice within one run.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_result_dedup
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use wfguard_domain::{SeenMessages, Violation, process_result_set};
use wfguard_types::{RepoPath, ResultSet, Value};

#[derive(Arbitrary, Debug)]
enum Item {
    Message(String),
    Number(i64),
    Flag(bool),
    Null,
}

#[derive(Arbitrary, Debug)]
struct RunInput {
    /// One inner vec per document.
    documents: Vec<Vec<Item>>,
}

fn to_value(items: &[Item]) -> Value {
    Value::Sequence(
        items
            .iter()
            .map(|item| match item {
                Item::Message(s) => Value::String(s.clone()),
                Item::Number(n) => Value::Integer(*n),
                Item::Flag(b) => Value::Bool(*b),
                Item::Null => Value::Null,
            })
            .collect(),
    )
}

fuzz_target!(|input: RunInput| {
    if input.documents.len() > 50 {
        return;
    }

    let mut seen = SeenMessages::new();
    let mut printed = HashSet::new();
    for (i, items) in input.documents.iter().enumerate() {
        let doc = RepoPath::new(format!("{i}.yml"));
        for v in process_result_set(&ResultSet::single(to_value(items)), &doc, &mut seen) {
            if let Violation::Message { message, .. } = v {
                assert!(printed.insert(message), "message reported twice");
            }
        }
    }
    assert_eq!(printed.len(), seen.len());
});
