//! Policy source and rule evaluation.
//!
//! Rule evaluation is delegated to an embedded Rego engine. The rest of the
//! workspace only sees the [`Evaluate`] seam and plain [`wfguard_types::ResultSet`]s.

#![forbid(unsafe_code)]

mod convert;
mod error;
mod evaluator;
mod source;

pub use error::PolicyError;
pub use evaluator::{Evaluate, PreparedQuery};
pub use source::{EMBEDDED_POLICY, EMBEDDED_POLICY_NAME, Policy, load_policy};
