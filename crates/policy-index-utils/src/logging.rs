//! Logging infrastructure for policy-index
//!
//! Diagnostics go through `tracing` and are written to stderr. Stdout is
//! reserved for the status lines (or the JSON summary) printed by the CLI.

use std::time::Instant;
use tracing::{Level, info, span};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "policy_index=info,warn";

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "policy_index=debug,info";

/// Build the env filter, letting `RUST_LOG` override the defaults
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new(VERBOSE_FILTER)
            } else {
                EnvFilter::try_new(DEFAULT_FILTER)
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber
///
/// Compact format, no thread or file information. Verbose mode adds targets
/// so crate-level debug output can be told apart.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Span covering one scan-render-write run
pub fn run_span(dir: &str, check: bool) -> tracing::Span {
    span!(Level::INFO, "policy_index_run", dir = %dir, check = check)
}

/// Wall-clock timer for a pipeline stage, logged at debug level on finish
pub struct StageTimer {
    stage: &'static str,
    started: Instant,
}

impl StageTimer {
    #[must_use]
    pub fn start(stage: &'static str) -> Self {
        Self {
            stage,
            started: Instant::now(),
        }
    }

    /// Log the elapsed time and return it in milliseconds
    pub fn finish(self) -> u128 {
        let duration_ms = self.started.elapsed().as_millis();
        tracing::debug!(stage = self.stage, duration_ms = %duration_ms, "Stage completed");
        duration_ms
    }
}

/// Log the outcome of a directory scan
pub fn log_scan_complete(dir: &str, applications: usize, documents: usize, collisions: usize) {
    info!(
        dir = %dir,
        applications = applications,
        documents = documents,
        collisions = collisions,
        "Scan completed"
    );
}
