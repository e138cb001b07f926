use crate::error::PolicyError;
use camino::Utf8Path;
use tracing::debug;
use wfguard_types::PolicySource;

pub const EMBEDDED_POLICY_NAME: &str = "embedded.rego";

/// Built-in policy: flag workflow steps pinned to `actions/checkout@v2`.
pub const EMBEDDED_POLICY: &str = r#"package main

import rego.v1

deny contains msg if {
	some job_name, job in input.jobs
	some step in job.steps
	step.uses == "actions/checkout@v2"
	msg := sprintf("job '%s' uses actions/checkout@v2; upgrade to actions/checkout@v4", [job_name])
}
"#;

/// Policy program text plus the name the engine reports in diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    pub name: String,
    pub text: String,
}

impl Policy {
    pub fn embedded() -> Self {
        Self {
            name: EMBEDDED_POLICY_NAME.to_string(),
            text: EMBEDDED_POLICY.to_string(),
        }
    }
}

/// Load the policy text. Relative file paths are resolved against `base`.
pub fn load_policy(source: &PolicySource, base: &Utf8Path) -> Result<Policy, PolicyError> {
    match source {
        PolicySource::Embedded => Ok(Policy::embedded()),
        PolicySource::File(path) => {
            let full = base.join(path);
            let text = std::fs::read_to_string(&full).map_err(|source| PolicyError::Read {
                path: full.clone(),
                source,
            })?;
            debug!(path = %full, bytes = text.len(), "loaded policy file");
            Ok(Policy {
                name: path.to_string(),
                text,
            })
        }
    }
}
