//! Dynamic value tree for workflow documents.
//!
//! Workflow YAML has no fixed schema and policies reach into arbitrary nested
//! paths, so documents are modeled as a tagged union rather than typed structs.

use crate::RepoPath;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// String-keyed mapping. `BTreeMap` keeps serialization order stable.
pub type Mapping = BTreeMap<String, Value>;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Follow a path of mapping keys.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(self, |v, key| v.get(key))
    }

    /// Convert into a JSON value for handing to the policy engine.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Sequence(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Mapping(m) => mapping_to_json(m),
        }
    }
}

pub fn mapping_to_json(mapping: &Mapping) -> JsonValue {
    JsonValue::Object(
        mapping
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(obj) => {
                Value::Mapping(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// One parsed workflow file.
///
/// Immutable after loading. The path is carried for diagnostics only; the
/// policy sees just the root mapping as `input`.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub path: RepoPath,
    pub root: Mapping,
}

impl Document {
    pub fn new(path: RepoPath, root: Mapping) -> Self {
        Self { path, root }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn to_input_json(&self) -> JsonValue {
        mapping_to_json(&self.root)
    }
}
