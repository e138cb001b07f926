//! The evaluate-and-report loop shared by every output format.

use crate::error::RunError;
use std::io::Write;
use tracing::debug;
use wfguard_domain::policy::{OnEvalError, OutputFormat};
use wfguard_domain::{DocumentError, RunSummary, SeenMessages, Violation, process_result_set};
use wfguard_policy::Evaluate;
use wfguard_types::Document;

/// Evaluate every document in order and report new violations.
///
/// Streaming formats write each violation to `out` (and flush) as soon as it is
/// discovered. The dedup set lives for exactly one call.
pub fn evaluate_documents<E: Evaluate + ?Sized>(
    documents: &[Document],
    evaluator: &E,
    on_eval_error: OnEvalError,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<RunSummary, RunError> {
    let mut seen = SeenMessages::new();
    let mut summary = RunSummary {
        documents_scanned: u32::try_from(documents.len()).unwrap_or(u32::MAX),
        ..RunSummary::default()
    };

    for doc in documents {
        let results = match evaluator.evaluate(doc) {
            Ok(results) => results,
            Err(source) => match on_eval_error {
                OnEvalError::Abort => {
                    return Err(RunError::Evaluate {
                        document: doc.path.clone(),
                        source,
                    });
                }
                OnEvalError::Continue => {
                    debug!(document = %doc.path, error = %source, "evaluation failed; continuing");
                    summary.errors.push(DocumentError {
                        document: doc.path.clone(),
                        message: source.to_string(),
                    });
                    continue;
                }
            },
        };
        summary.documents_evaluated += 1;

        for violation in process_result_set(&results, &doc.path, &mut seen) {
            if format.is_streaming() {
                emit(format, &violation, out)?;
            }
            summary.violations.push(violation);
        }
    }

    Ok(summary)
}

fn emit(format: OutputFormat, violation: &Violation, out: &mut dyn Write) -> std::io::Result<()> {
    let line = match format {
        OutputFormat::Github => wfguard_render::render_github_annotation(violation),
        _ => wfguard_render::render_text_line(violation),
    };
    writeln!(out, "{line}")?;
    out.flush()
}
