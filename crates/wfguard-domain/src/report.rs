use crate::policy::FailOn;
use serde::Serialize;
use wfguard_types::{RepoPath, ids};

/// A violation discovered while processing one document's result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A deny message. Deduplicated across the run; `document` is where it was first seen.
    Message { message: String, document: RepoPath },
    /// A boolean `true` deny result. Carries no text, so it is never deduplicated.
    Flagged { document: RepoPath },
}

impl Violation {
    /// Text printed for this violation.
    pub fn text(&self) -> &str {
        match self {
            Violation::Message { message, .. } => message,
            Violation::Flagged { .. } => ids::FLAGGED_NOTICE,
        }
    }

    pub fn document(&self) -> &RepoPath {
        match self {
            Violation::Message { document, .. } | Violation::Flagged { document } => document,
        }
    }
}

/// A document whose evaluation failed while the run kept going.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentError {
    pub document: RepoPath,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents_scanned: u32,
    pub documents_evaluated: u32,
    pub violations: Vec<Violation>,
    pub errors: Vec<DocumentError>,
}

impl RunSummary {
    /// Errors take precedence over violations.
    pub fn verdict(&self) -> Verdict {
        if !self.errors.is_empty() {
            Verdict::Error
        } else if !self.violations.is_empty() {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }
}

/// Map verdict to exit code: 0 = pass, 1 = error, 2 = violations (unless `fail_on = never`).
pub fn verdict_exit_code(verdict: Verdict, fail_on: FailOn) -> i32 {
    match (verdict, fail_on) {
        (Verdict::Pass, _) => ids::EXIT_OK,
        (Verdict::Fail, FailOn::Violation) => ids::EXIT_VIOLATIONS,
        (Verdict::Fail, FailOn::Never) => ids::EXIT_OK,
        (Verdict::Error, _) => ids::EXIT_ERROR,
    }
}
