//! Stable DTOs and IDs used across the wfguard workspace.
//!
//! This crate is intentionally boring:
//! - the dynamic value tree parsed from workflow YAML
//! - the result set shape handed back by the policy engine
//! - canonical repo-relative path handling
//! - stable string IDs and exit codes

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod policy_source;
pub mod result;
pub mod value;

pub use path::RepoPath;
pub use policy_source::PolicySource;
pub use result::{ResultEntry, ResultSet};
pub use value::{Document, Mapping, Value};
