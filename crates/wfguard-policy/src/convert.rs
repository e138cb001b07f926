use tracing::debug;
use wfguard_types::{ResultEntry, ResultSet, Value};

/// Convert engine query results into a [`ResultSet`].
///
/// Values go through JSON: Rego sets become sequences (engine order is sorted,
/// so the result is deterministic). Undefined or unrepresentable values are dropped.
pub(crate) fn to_result_set(results: regorus::QueryResults) -> ResultSet {
    let entries = results
        .result
        .into_iter()
        .map(|r| ResultEntry {
            expressions: r
                .expressions
                .into_iter()
                .filter_map(|e| to_value(&e.value))
                .collect(),
        })
        .collect();
    ResultSet::new(entries)
}

pub(crate) fn to_value(value: &regorus::Value) -> Option<Value> {
    if *value == regorus::Value::Undefined {
        return None;
    }
    let json = match value.to_json_str() {
        Ok(json) => json,
        Err(err) => {
            debug!(error = %err, "dropping result value without a JSON form");
            return None;
        }
    };
    match serde_json::from_str::<serde_json::Value>(&json) {
        Ok(v) => Some(Value::from(v)),
        Err(err) => {
            debug!(error = %err, "dropping result value that failed to decode");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_is_dropped() {
        assert_eq!(to_value(&regorus::Value::Undefined), None);
    }

    #[test]
    fn json_values_map_to_tree() {
        let v = regorus::Value::from_json_str(r#"{"a": ["x", 1, true]}"#).expect("json");
        let got = to_value(&v).expect("value");
        let items = got.get("a").and_then(Value::as_sequence).expect("seq");
        assert_eq!(items[0].as_str(), Some("x"));
        assert_eq!(items[1], Value::Integer(1));
        assert_eq!(items[2], Value::Bool(true));
    }
}
