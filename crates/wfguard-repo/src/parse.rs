use crate::error::ParseError;
use serde::Deserialize;
use serde_yaml::Value as YamlValue;
use wfguard_types::{Document, Mapping, RepoPath, Value};

/// Parse one workflow file into a [`Document`].
///
/// - An empty file (blank lines and comments only) is an empty mapping.
/// - Merge keys (`<<`) are applied.
/// - Tags are dropped; the tagged value is kept.
/// - Non-string mapping keys are stringified (`true`, `1`, ...).
/// - Only the first document of a `---`-separated stream is used.
/// - A top-level value other than a mapping is an error.
pub fn parse_document(path: RepoPath, text: &str) -> Result<Document, ParseError> {
    if is_blank(text) {
        return Ok(Document::new(path, Mapping::new()));
    }

    let Some(first) = serde_yaml::Deserializer::from_str(text).next() else {
        return Ok(Document::new(path, Mapping::new()));
    };
    let mut raw = YamlValue::deserialize(first)?;
    raw.apply_merge()?;

    match convert(raw) {
        Value::Mapping(root) => Ok(Document::new(path, root)),
        Value::Null => Ok(Document::new(path, Mapping::new())),
        other => Err(ParseError::NotAMapping {
            found: kind_name(&other),
        }),
    }
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let t = line.trim();
        t.is_empty() || t.starts_with('#') || t == "---"
    })
}

fn convert(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Sequence(items.into_iter().map(convert).collect()),
        YamlValue::Mapping(m) => Value::Mapping(
            m.into_iter()
                .map(|(k, v)| (key_to_string(k), convert(v)))
                .collect(),
        ),
        YamlValue::Tagged(tagged) => convert(tagged.value),
    }
}

fn key_to_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        complex => serde_yaml::to_string(&complex)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Integer(_) | Value::Float(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
    }
}
