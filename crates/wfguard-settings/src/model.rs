use serde::{Deserialize, Serialize};

/// `wfguard.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional and unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WfguardConfigV1 {
    /// Optional schema string for tooling (`wfguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directory holding workflow files, relative to the repo root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows_dir: Option<String>,

    /// Policy file, relative to the repo root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Use the embedded policy instead of a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin_policy: Option<bool>,

    /// Query path of the deny rule (default `data.main.deny`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Glob patterns of workflow files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// `violation` (default) or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// `abort` (default) or `continue`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_eval_error: Option<String>,

    /// `text` (default), `github`, `markdown` or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
