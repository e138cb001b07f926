use wfguard_policy::PolicyError;
use wfguard_repo::LoadError;
use wfguard_types::{RepoPath, ids};

/// Fatal errors of a check run, tagged by the phase that failed.
///
/// Every variant aborts the run; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("config: {0:#}")]
    Config(anyhow::Error),

    #[error("load workflows: {0}")]
    Load(#[from] LoadError),

    #[error("load policy: {0}")]
    PolicyRead(#[source] PolicyError),

    #[error("prepare policy: {0}")]
    Prepare(#[source] PolicyError),

    #[error("evaluate {document}: {source}")]
    Evaluate {
        document: RepoPath,
        source: PolicyError,
    },

    #[error("write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RunError {
    /// Stable tag for the failing phase.
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::Config(_) => ids::KIND_CONFIG,
            RunError::Load(_) => ids::KIND_LOAD,
            RunError::PolicyRead(_) => ids::KIND_POLICY_READ,
            RunError::Prepare(_) => ids::KIND_PREPARE,
            RunError::Evaluate { .. } => ids::KIND_EVALUATE,
            RunError::Output(_) => ids::KIND_OUTPUT,
        }
    }

    pub fn exit_code(&self) -> i32 {
        ids::EXIT_ERROR
    }
}
