//! Pure result processing (no IO).
//!
//! Input: result sets produced by the policy evaluator, one per document.
//! Output: newly discovered violations, deduplicated across the run, plus a verdict.

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;

mod processor;
mod seen;

pub use processor::process_result_set;
pub use report::{DocumentError, RunSummary, Verdict, Violation, verdict_exit_code};
pub use seen::SeenMessages;

#[cfg(test)]
mod props;
