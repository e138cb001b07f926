//! Use case orchestration for wfguard.
//!
//! This crate provides the application layer: it wires the loader, the policy
//! evaluator, the result processor, and the renderers into one sequential
//! pipeline. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod error;
mod pipeline;

pub use check::{CheckInput, CheckOutput, run_check};
pub use error::RunError;
pub use pipeline::evaluate_documents;
pub use wfguard_policy::EMBEDDED_POLICY;
pub use wfguard_settings::Overrides;
