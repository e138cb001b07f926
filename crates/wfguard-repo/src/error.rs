use camino::Utf8PathBuf;

/// Errors that abort document loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The directory walk failed (missing root, permission denied, ...).
    #[error("walk {path}: {source}")]
    Walk {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A matched workflow file could not be read.
    #[error("read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched workflow file is not a valid YAML mapping.
    #[error("parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("invalid exclude glob {pattern}: {source}")]
    InvalidExclude {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(std::path::PathBuf),
}

/// Why a single file's contents could not become a document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("top-level value is {found}, expected a mapping")]
    NotAMapping { found: &'static str },
}
