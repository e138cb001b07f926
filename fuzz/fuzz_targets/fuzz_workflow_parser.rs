//! Fuzz target for workflow YAML parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_workflow_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Workflow files are read as UTF-8 text; anything else fails before parsing.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(doc) = wfguard_repo::fuzz::parse_workflow(text) {
            // Parsed documents must always be representable as policy input.
            let _ = doc.to_input_json();
        }
    }
});
