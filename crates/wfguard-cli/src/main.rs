//! CLI entry point for wfguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `wfguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use wfguard_app::{CheckInput, Overrides, RunError, run_check};
use wfguard_types::ids;

#[derive(Parser, Debug)]
#[command(
    name = "wfguard",
    version,
    about = "Policy guard for GitHub Actions workflow files"
)]
struct Cli {
    /// Repository root; workflow, policy, and config paths are relative to it.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to wfguard config TOML.
    #[arg(long, default_value = ids::DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the policy against every workflow file and print violations.
    Check {
        /// Directory scanned recursively for *.yml / *.yaml files.
        #[arg(long)]
        workflows: Option<String>,

        /// Policy file (Rego).
        #[arg(long, conflicts_with = "builtin_policy")]
        policy: Option<String>,

        /// Use the embedded policy instead of a file.
        #[arg(long)]
        builtin_policy: bool,

        /// Query path of the deny rule.
        #[arg(long)]
        query: Option<String>,

        /// Glob of workflow files to skip (relative to the workflows dir). Repeatable.
        #[arg(long)]
        exclude: Vec<String>,

        /// Output format (text|github|markdown|json).
        #[arg(long)]
        format: Option<String>,

        /// When violations fail the run (violation|never).
        #[arg(long)]
        fail_on: Option<String>,

        /// What a per-document evaluation error does (abort|continue).
        #[arg(long)]
        on_eval_error: Option<String>,
    },

    /// Print the embedded policy.
    Policy,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref workflows,
            ref policy,
            builtin_policy,
            ref query,
            ref exclude,
            ref format,
            ref fail_on,
            ref on_eval_error,
        } => {
            let overrides = Overrides {
                workflows_dir: workflows.clone(),
                policy: policy.clone(),
                builtin_policy,
                query: query.clone(),
                exclude: exclude.clone(),
                fail_on: fail_on.clone(),
                on_eval_error: on_eval_error.clone(),
                format: format.clone(),
            };
            cmd_check(&cli, overrides)
        }
        Commands::Policy => {
            print!("{}", wfguard_app::EMBEDDED_POLICY);
            Ok(())
        }
    }
}

/// Diagnostics go to stderr; stdout carries only results.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_check(cli: &Cli, overrides: Overrides) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        if !cli.repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", cli.repo_root);
        }
        let cfg_text = read_config(&cli.repo_root.join(&cli.config))?;

        let input = CheckInput {
            repo_root: &cli.repo_root,
            config_text: &cfg_text,
            overrides,
        };

        let mut stdout = std::io::stdout().lock();
        let output = run_check(input, &mut stdout)?;

        for err in &output.summary.errors {
            eprintln!("wfguard: evaluation failed for {}: {}", err.document, err.message);
        }
        Ok(output.exit_code)
    })();

    match result {
        Ok(code) => {
            if code != ids::EXIT_OK {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            // RunError messages already carry their causes.
            let code = match err.downcast_ref::<RunError>() {
                Some(run_err) => {
                    tracing::debug!(kind = run_err.kind(), "check failed");
                    eprintln!("wfguard error: {run_err}");
                    run_err.exit_code()
                }
                None => {
                    eprintln!("wfguard error: {err:#}");
                    ids::EXIT_ERROR
                }
            };
            std::process::exit(code);
        }
    }
}

/// Missing config file is allowed (defaults apply); any other read failure is fatal.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}
