use crate::model::WfguardConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use globset::Glob;
use wfguard_domain::policy::{EffectiveConfig, FailOn, OnEvalError, OutputFormat};
use wfguard_types::PolicySource;

/// Values supplied on the command line. They win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub workflows_dir: Option<String>,
    pub policy: Option<String>,
    pub builtin_policy: bool,
    pub query: Option<String>,
    /// Appended to the config file's exclude list.
    pub exclude: Vec<String>,
    pub fail_on: Option<String>,
    pub on_eval_error: Option<String>,
    pub format: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: WfguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(dir) = overrides.workflows_dir.or(cfg.workflows_dir) {
        effective.workflows_dir = Utf8PathBuf::from(dir);
    }

    effective.policy = resolve_policy_source(
        overrides.policy,
        overrides.builtin_policy,
        cfg.policy,
        cfg.builtin_policy.unwrap_or(false),
    )?;

    if let Some(query) = overrides.query.or(cfg.query) {
        effective.query = query;
    }

    let mut exclude = cfg.exclude;
    exclude.extend(overrides.exclude);
    validate_globs(&exclude)?;
    effective.exclude = exclude;

    if let Some(v) = overrides.fail_on.or(cfg.fail_on) {
        effective.fail_on = parse_fail_on(&v)?;
    }
    if let Some(v) = overrides.on_eval_error.or(cfg.on_eval_error) {
        effective.on_eval_error = parse_on_eval_error(&v)?;
    }
    if let Some(v) = overrides.format.or(cfg.format) {
        effective.format = parse_format(&v)?;
    }

    Ok(ResolvedConfig { effective })
}

fn resolve_policy_source(
    cli_path: Option<String>,
    cli_builtin: bool,
    cfg_path: Option<String>,
    cfg_builtin: bool,
) -> anyhow::Result<PolicySource> {
    if cli_builtin && cli_path.is_some() {
        anyhow::bail!("--policy and --builtin-policy are mutually exclusive");
    }
    if cli_builtin {
        return Ok(PolicySource::Embedded);
    }
    if let Some(path) = cli_path {
        return Ok(PolicySource::File(Utf8PathBuf::from(path)));
    }
    match (cfg_path, cfg_builtin) {
        (Some(_), true) => anyhow::bail!("config sets both `policy` and `builtin_policy = true`"),
        (Some(path), false) => Ok(PolicySource::File(Utf8PathBuf::from(path))),
        (None, true) => Ok(PolicySource::Embedded),
        (None, false) => Ok(PolicySource::default()),
    }
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "violation" | "violations" => Ok(FailOn::Violation),
        "never" => Ok(FailOn::Never),
        other => anyhow::bail!("unknown fail_on: {other} (expected violation|never)"),
    }
}

fn parse_on_eval_error(v: &str) -> anyhow::Result<OnEvalError> {
    match v {
        "abort" => Ok(OnEvalError::Abort),
        "continue" => Ok(OnEvalError::Continue),
        other => anyhow::bail!("unknown on_eval_error: {other} (expected abort|continue)"),
    }
}

fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "text" => Ok(OutputFormat::Text),
        "github" => Ok(OutputFormat::Github),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected text|github|markdown|json)"),
    }
}
