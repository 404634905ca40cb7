//! Scanner/grouper for static HTML policy documents
//!
//! Filenames follow `<app-prefix>-<kind>[.<lang>].html`. Matching names are
//! grouped into a [`PolicyIndex`] keyed by normalized application name, then
//! policy kind, then language slot. [`scan`] is a pure function over a
//! listing; [`scan_directory`] feeds it from the filesystem.

pub mod grammar;
pub mod index;
pub mod listing;
pub mod types;

pub use grammar::{is_candidate, normalize_app_name, parse_filename};
pub use index::{AppPolicies, Collision, PolicyIndex, ScanOutcome, scan};
pub use listing::{list_directory, scan_directory};
pub use types::{ApplicationName, LanguageSlot, PolicyDocument, PolicyFile, PolicyKind};
