use camino::Utf8PathBuf;

/// Errors from loading, preparing, or evaluating a policy.
///
/// Engine errors are flattened to their rendered message; the engine's own
/// error type does not cross this boundary.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("read policy {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("query is empty")]
    EmptyQuery,

    #[error("prepare {policy} for `{query}`: {message}")]
    Prepare {
        policy: String,
        query: String,
        message: String,
    },

    #[error("evaluate `{query}`: {message}")]
    Evaluate { query: String, message: String },
}
