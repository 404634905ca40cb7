//! policy-index - README list and index page generator for static policy pages
//!
//! Scans a directory for HTML policy documents named
//! `<app>-(privacy|user-agreement|support)[.<lang>].html`, groups them by
//! application, kind and language, and regenerates:
//!
//! - the block between `<!-- AUTO-GENERATED-LIST:START -->` and
//!   `<!-- AUTO-GENERATED-LIST:END -->` in a README;
//! - a self-contained `index.html` linking every document.
//!
//! # Quick Start (Library)
//!
//! ```rust,no_run
//! use policy_index::{Config, WriteMode, execute};
//!
//! let config = Config::builder().base_dir("site").build().expect("valid config");
//! let summary = execute(&config, WriteMode::Write).expect("run succeeds");
//! println!("{} applications", summary.applications);
//! ```
//!
//! The building blocks are re-exported from the workspace crates: the pure
//! [`scan`] over a filename listing, the [`render_markdown`] and
//! [`render_index_html`] renderers, and the [`update_readme`] /
//! [`write_index`] publishers.

pub mod cli;
pub mod pipeline;
pub mod status;

pub use pipeline::{RunSummary, execute};

pub use policy_index_config::{CliArgs, Config, ConfigBuilder, ConfigSource, Locale, OnCollision};
pub use policy_index_publish::{
    END_MARKER, IndexOutcome, ReadmeOutcome, START_MARKER, WriteMode, replace_generated_block,
    update_readme, write_index,
};
pub use policy_index_render::{LabelSet, render_index_html, render_markdown};
pub use policy_index_scanner::{
    AppPolicies, ApplicationName, Collision, LanguageSlot, PolicyDocument, PolicyIndex, PolicyKind,
    ScanOutcome, is_candidate, list_directory, normalize_app_name, parse_filename, scan,
    scan_directory,
};
pub use policy_index_utils::error::{PolicyIndexError, UserFriendlyError};
pub use policy_index_utils::exit_codes::ExitCode;
