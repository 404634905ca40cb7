//! Command-line interface for policy-index
//!
//! Running with no arguments scans the current directory, regenerates the
//! README list and writes `index.html`, the same as the classic script.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;

use policy_index_config::{CliArgs, Config};
use policy_index_publish::WriteMode;
use policy_index_utils::error::PolicyIndexError;
use policy_index_utils::exit_codes::ExitCode;
use policy_index_utils::logging::{init_tracing, run_span};

use crate::pipeline::{RunSummary, execute};
use crate::status::status_lines;

/// policy-index - keep a README list and an index page in sync with policy pages
#[derive(Parser, Debug)]
#[command(name = "policy-index")]
#[command(
    about = "Regenerate the README list and index.html for static HTML policy pages"
)]
#[command(long_about = r#"
Scans a directory for policy pages named

  <app>-(privacy|user-agreement|support)[.<lang>].html

groups them by application, kind and language, then rewrites the block between
<!-- AUTO-GENERATED-LIST:START --> and <!-- AUTO-GENERATED-LIST:END --> in the
README and regenerates a standalone index page.

EXAMPLES:
  # Regenerate README.md and index.html in the current directory
  policy-index

  # Scan another directory, English labels
  policy-index --dir site --locale en

  # CI: fail when the committed outputs are out of date
  policy-index --check

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  The config file is discovered by searching upward from the current directory
  for .policy-index/config.toml, stopping at the repository root.

EXIT CODES:
  0 success, 1 I/O failure, 2 invalid arguments or configuration,
  3 invalid README markers, 4 collisions rejected, 5 stale outputs (--check)
"#)]
#[command(version)]
pub struct Cli {
    /// Directory to scan for policy pages [default: .]
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// README whose generated block is rewritten [default: README.md]
    #[arg(long, value_name = "PATH")]
    pub readme: Option<PathBuf>,

    /// Index page to generate [default: index.html]
    #[arg(long, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Label language: zh or en [default: zh]
    #[arg(long)]
    pub locale: Option<String>,

    /// Path to configuration file (overrides discovery)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to do when two files claim the same slot: warn or fail [default: warn]
    #[arg(long, value_name = "POLICY")]
    pub on_collision: Option<String>,

    /// Do not write anything; exit with code 5 if an output is out of date
    #[arg(long)]
    pub check: bool,

    /// Print a JSON run summary instead of status lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_path: self.config.clone(),
            dir: self.dir.clone(),
            readme: self.readme.clone(),
            index: self.index.clone(),
            locale: self.locale.clone(),
            on_collision: self.on_collision.clone(),
        }
    }

    fn write_mode(&self) -> WriteMode {
        if self.check {
            WriteMode::Check
        } else {
            WriteMode::Write
        }
    }
}

/// Build the clap command, for introspection in tests
#[must_use]
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}

/// Main CLI execution function.
///
/// Handles ALL output including errors and returns the exit code to use on
/// failure. main.rs only maps `Err(code)` to the process exit status.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let start_dir = resolve_start_dir(std::env::current_dir())?;
    run_in(&cli, &start_dir)
}

fn resolve_start_dir(current_dir: std::io::Result<PathBuf>) -> Result<PathBuf, ExitCode> {
    current_dir.map_err(|e| report(&PolicyIndexError::Io(e)))
}

/// Run with already-parsed arguments, resolving relative paths against `start_dir`
pub fn run_in(cli: &Cli, start_dir: &Path) -> Result<(), ExitCode> {
    let config = Config::discover_from(start_dir, &cli.config_args())
        .map_err(|e| report(&PolicyIndexError::from(e)))?;

    for (key, (value, source)) in config.effective_config() {
        debug!(key = %key, value = %value, source = %source, "Effective configuration");
    }

    let mode = cli.write_mode();
    let span = run_span(&config.paths.dir.display().to_string(), mode.is_check());
    let _guard = span.enter();

    let summary = execute(&config, mode).map_err(|e| report(&e))?;

    if cli.json {
        if let Err(e) = print_json(&summary) {
            eprintln!("Error: {e:#}");
            return Err(ExitCode::INTERNAL);
        }
    } else {
        for line in status_lines(&summary, config.render.locale, start_dir) {
            println!("{line}");
        }
    }

    let stale = summary.stale_outputs();
    if !stale.is_empty() {
        return Err(report(&PolicyIndexError::StaleOutputs { outputs: stale }));
    }

    Ok(())
}

fn report(err: &PolicyIndexError) -> ExitCode {
    eprint!("{}", err.display_for_user());
    err.to_exit_code()
}

fn print_json(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;
    println!("{json}");
    Ok(())
}
