use crate::Value;

/// Output of evaluating a prepared query against one document.
///
/// Transient: created per document, consumed by the result processor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    pub entries: Vec<ResultEntry>,
}

/// One result row; holds one value per expression in the query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultEntry {
    pub expressions: Vec<Value>,
}

impl ResultSet {
    pub fn new(entries: Vec<ResultEntry>) -> Self {
        Self { entries }
    }

    /// Convenience constructor for a single entry with a single expression value.
    pub fn single(value: Value) -> Self {
        Self {
            entries: vec![ResultEntry {
                expressions: vec![value],
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All expression values, entry by entry, in result order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().flat_map(|e| e.expressions.iter())
    }
}
