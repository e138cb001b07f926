//! Property tests for run-wide deduplication.

use crate::{SeenMessages, Violation, process_result_set};
use proptest::prelude::*;
use wfguard_types::{RepoPath, ResultSet, Value};

fn batch_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    // Small alphabet so duplicates are common.
    prop::collection::vec(prop::collection::vec("[a-d]{1,2}", 0..6), 0..8)
}

fn run(batches: &[Vec<String>]) -> Vec<String> {
    let mut seen = SeenMessages::new();
    let mut printed = Vec::new();
    for (i, batch) in batches.iter().enumerate() {
        let value = Value::Sequence(batch.iter().map(|s| Value::String(s.clone())).collect());
        let doc = RepoPath::new(format!("{i}.yml"));
        for v in process_result_set(&ResultSet::single(value), &doc, &mut seen) {
            if let Violation::Message { message, .. } = v {
                printed.push(message);
            }
        }
    }
    printed
}

proptest! {
    #[test]
    fn output_is_first_seen_order_of_unique_messages(batches in batch_strategy()) {
        let printed = run(&batches);

        let mut expected: Vec<String> = Vec::new();
        for msg in batches.iter().flatten() {
            if !expected.contains(msg) {
                expected.push(msg.clone());
            }
        }
        prop_assert_eq!(printed, expected);
    }

    #[test]
    fn rerun_is_identical(batches in batch_strategy()) {
        prop_assert_eq!(run(&batches), run(&batches));
    }
}
