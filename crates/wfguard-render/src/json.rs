use serde_json::{Value as JsonValue, json};
use wfguard_domain::RunSummary;
use wfguard_types::ids;

/// Machine-readable run report (`wfguard.report.v1`).
pub fn render_json(summary: &RunSummary) -> JsonValue {
    json!({
        "schema": ids::SCHEMA_REPORT_V1,
        "tool": {
            "name": "wfguard",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "verdict": summary.verdict(),
        "documents_scanned": summary.documents_scanned,
        "documents_evaluated": summary.documents_evaluated,
        "violations": summary.violations,
        "errors": summary.errors,
    })
}
