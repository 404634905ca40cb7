//! One scan-render-write run
//!
//! The scanner runs once and produces an immutable index that both renderers
//! read. The README is updated before the index page, and the index page is
//! written whatever happened to the README.

use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use policy_index_config::{Config, OnCollision};
use policy_index_publish::{IndexOutcome, ReadmeOutcome, WriteMode, update_readme, write_index};
use policy_index_render::{LabelSet, render_index_html, render_markdown};
use policy_index_scanner::{Collision, PolicyDocument, scan_directory};
use policy_index_utils::error::PolicyIndexError;
use policy_index_utils::logging::StageTimer;

/// What a run found and did, printed as JSON with `--json`
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub mode: WriteMode,
    pub dir: String,
    pub readme_path: String,
    pub index_path: String,
    pub applications: usize,
    pub documents: Vec<PolicyDocument>,
    pub collisions: Vec<Collision>,
    pub readme: ReadmeOutcome,
    pub index: IndexOutcome,
}

impl RunSummary {
    /// Outputs that check mode found out of date
    #[must_use]
    pub fn stale_outputs(&self) -> Vec<String> {
        let mut stale = Vec::new();
        if self.readme == ReadmeOutcome::Stale {
            stale.push(self.readme_path.clone());
        }
        if self.index == IndexOutcome::Stale {
            stale.push(self.index_path.clone());
        }
        stale
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Scan `config.paths.dir`, render both outputs and publish them.
///
/// With [`OnCollision::Fail`] any collision aborts the run before anything is
/// written. In [`WriteMode::Check`] nothing is written at all.
pub fn execute(config: &Config, mode: WriteMode) -> Result<RunSummary, PolicyIndexError> {
    let timer = StageTimer::start("scan");
    let outcome = scan_directory(&config.paths.dir)?;
    timer.finish();

    if outcome.has_collisions() {
        match config.scan.on_collision {
            OnCollision::Fail => {
                let slots: Vec<String> = outcome.collisions.iter().map(ToString::to_string).collect();
                return Err(PolicyIndexError::CollisionsRejected {
                    count: slots.len(),
                    slots,
                });
            }
            OnCollision::Warn => {
                warn!(
                    count = outcome.collisions.len(),
                    "Slot collisions resolved by keeping the later file"
                );
            }
        }
    }

    let timer = StageTimer::start("render");
    let labels = LabelSet::from_config(&config.render);
    let markdown = render_markdown(&outcome.index, &labels);
    let html = render_index_html(&outcome.index, &labels);
    timer.finish();

    let timer = StageTimer::start("publish");
    // The index page is written even when the README update fails; that
    // error is returned afterwards.
    let readme = update_readme(&config.paths.readme, &markdown, mode);
    let index = write_index(&config.paths.index, &html, mode)?;
    timer.finish();
    let readme = readme?;

    info!(
        applications = outcome.index.len(),
        readme = ?readme,
        index = ?index,
        "Run completed"
    );

    Ok(RunSummary {
        mode,
        dir: display(&config.paths.dir),
        readme_path: display(&config.paths.readme),
        index_path: display(&config.paths.index),
        applications: outcome.index.len(),
        documents: outcome.index.documents(),
        collisions: outcome.collisions,
        readme,
        index,
    })
}
