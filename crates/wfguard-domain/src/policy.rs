use camino::Utf8PathBuf;
use wfguard_types::{PolicySource, ids};

/// When a run with violations should fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    #[default]
    Violation,
    Never,
}

/// What to do when evaluating a single document fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnEvalError {
    /// Stop the whole run at the first failing document.
    #[default]
    Abort,
    /// Record the failure and keep evaluating the remaining documents.
    Continue,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Github,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Streaming formats write each violation as soon as it is discovered.
    pub fn is_streaming(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Github)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Directory scanned for workflow files, relative to the repo root.
    pub workflows_dir: Utf8PathBuf,
    pub policy: PolicySource,
    pub query: String,
    /// Globs matched against paths relative to `workflows_dir`.
    pub exclude: Vec<String>,
    pub fail_on: FailOn,
    pub on_eval_error: OnEvalError,
    pub format: OutputFormat,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            workflows_dir: Utf8PathBuf::from(ids::DEFAULT_WORKFLOWS_DIR),
            policy: PolicySource::default(),
            query: ids::DEFAULT_QUERY.to_string(),
            exclude: Vec::new(),
            fail_on: FailOn::default(),
            on_eval_error: OnEvalError::default(),
            format: OutputFormat::default(),
        }
    }
}
