use crate::report::Violation;
use crate::seen::SeenMessages;
use wfguard_types::{RepoPath, ResultSet, Value};

/// Extract violations from one result set, skipping messages already in `seen`.
///
/// Returned violations are in discovery order and should be emitted immediately
/// by the caller. Values of unexpected shape are skipped, never an error:
/// - a sequence contributes each string element; non-strings are ignored
/// - a boolean `true` contributes a [`Violation::Flagged`] (not deduplicated)
/// - anything else is ignored
pub fn process_result_set(
    results: &ResultSet,
    document: &RepoPath,
    seen: &mut SeenMessages,
) -> Vec<Violation> {
    let mut out = Vec::new();
    if results.is_empty() {
        return out;
    }

    for value in results.values() {
        match value {
            Value::Sequence(items) => {
                for msg in items.iter().filter_map(Value::as_str) {
                    if seen.insert(msg) {
                        out.push(Violation::Message {
                            message: msg.to_string(),
                            document: document.clone(),
                        });
                    }
                }
            }
            Value::Bool(true) => out.push(Violation::Flagged {
                document: document.clone(),
            }),
            _ => {}
        }
    }

    out
}
