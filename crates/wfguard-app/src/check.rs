//! The `check` use case: load workflows, evaluate the policy, report violations.

use crate::error::RunError;
use crate::pipeline::evaluate_documents;
use camino::Utf8Path;
use std::io::Write;
use tracing::info;
use wfguard_domain::policy::OutputFormat;
use wfguard_domain::{RunSummary, verdict_exit_code};
use wfguard_policy::PreparedQuery;
use wfguard_settings::Overrides;
use wfguard_types::ids;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root; workflow, policy, and config paths are relative to it.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub summary: RunSummary,
    pub exit_code: i32,
}

/// Run the check use case, writing rendered results to `out`.
///
/// Phases run strictly in order and each failure is fatal:
/// config, document load, policy read, query preparation, evaluation.
pub fn run_check(input: CheckInput<'_>, out: &mut dyn Write) -> Result<CheckOutput, RunError> {
    let cfg = if input.config_text.trim().is_empty() {
        wfguard_settings::WfguardConfigV1::default()
    } else {
        wfguard_settings::parse_config_toml(input.config_text).map_err(RunError::Config)?
    };
    let resolved =
        wfguard_settings::resolve_config(cfg, input.overrides.clone()).map_err(RunError::Config)?;
    let eff = &resolved.effective;

    let documents =
        wfguard_repo::load_documents(input.repo_root, &eff.workflows_dir, &eff.exclude)?;
    info!(count = documents.len(), dir = %eff.workflows_dir, "loaded workflow documents");

    let policy =
        wfguard_policy::load_policy(&eff.policy, input.repo_root).map_err(RunError::PolicyRead)?;
    let prepared = PreparedQuery::prepare(&policy, &eff.query).map_err(RunError::Prepare)?;

    let summary = evaluate_documents(&documents, &prepared, eff.on_eval_error, eff.format, out)?;

    match eff.format {
        OutputFormat::Markdown => write!(out, "{}", wfguard_render::render_markdown(&summary))?,
        OutputFormat::Json => {
            let report = serde_json::to_string_pretty(&wfguard_render::render_json(&summary))
                .map_err(std::io::Error::from)?;
            writeln!(out, "{report}")?;
        }
        OutputFormat::Text | OutputFormat::Github => {}
    }
    out.flush()?;

    let exit_code = if summary.errors.is_empty() {
        verdict_exit_code(summary.verdict(), eff.fail_on)
    } else {
        ids::EXIT_ERROR
    };
    info!(
        violations = summary.violations.len(),
        errors = summary.errors.len(),
        exit_code,
        "check finished"
    );

    Ok(CheckOutput {
        summary,
        exit_code,
    })
}
