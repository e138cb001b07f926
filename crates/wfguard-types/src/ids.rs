//! Stable identifiers for error kinds, report schemas, and process exit codes.

pub const SCHEMA_REPORT_V1: &str = "wfguard.report.v1";

/// Default query evaluated against every workflow document.
pub const DEFAULT_QUERY: &str = "data.main.deny";

/// Default directory scanned for workflow files, relative to the repo root.
pub const DEFAULT_WORKFLOWS_DIR: &str = ".github/workflows";

/// Default policy file, relative to the repo root.
pub const DEFAULT_POLICY_FILE: &str = "policy.rego";

/// Default config file, relative to the repo root.
pub const DEFAULT_CONFIG_FILE: &str = "wfguard.toml";

/// Printed for a boolean `true` deny result, which carries no message text.
pub const FLAGGED_NOTICE: &str = "policy violation detected";

// Error kinds
pub const KIND_CONFIG: &str = "config";
pub const KIND_LOAD: &str = "load";
pub const KIND_POLICY_READ: &str = "policy_read";
pub const KIND_PREPARE: &str = "prepare";
pub const KIND_EVALUATE: &str = "evaluate";
pub const KIND_OUTPUT: &str = "output";

// Exit codes
pub const EXIT_OK: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_VIOLATIONS: i32 = 2;
