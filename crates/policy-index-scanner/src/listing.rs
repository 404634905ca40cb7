//! Directory listing that feeds [`scan`](crate::scan)

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use tracing::debug;

use policy_index_utils::error::ScanError;
use policy_index_utils::logging::log_scan_complete;

use crate::index::{ScanOutcome, scan};

/// List the regular files directly inside `dir`, sorted by name.
///
/// An absent directory yields an empty listing. Subdirectories, broken
/// symlinks and names that are not valid UTF-8 are left out. Sorting makes
/// the collision winner reproducible across filesystems.
pub fn list_directory(dir: &Path) -> Result<Vec<String>, ScanError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "Document directory does not exist; treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(ScanError::ListFailed {
                dir: dir.display().to_string(),
                reason: e.to_string(),
            });
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::ListFailed {
            dir: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        // Follow symlinks so a linked policy page still counts as a file.
        let path = entry.path();
        if !is_listable_file(fs::metadata(&path), dir, &path)? {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(name = ?raw, "Skipping non UTF-8 filename"),
        }
    }

    names.sort();
    Ok(names)
}

/// Classify the result of a `stat` on a directory entry.
///
/// Only `NotFound` (a dangling symlink, or an entry removed mid-listing) is
/// skipped; every other failure aborts the listing.
fn is_listable_file(
    metadata: io::Result<fs::Metadata>,
    dir: &Path,
    path: &Path,
) -> Result<bool, ScanError> {
    match metadata {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Skipping dangling entry");
            Ok(false)
        }
        Err(e) => Err(ScanError::ListFailed {
            dir: dir.display().to_string(),
            reason: format!("{}: {e}", path.display()),
        }),
    }
}

/// List `dir` and group its contents
pub fn scan_directory(dir: &Path) -> Result<ScanOutcome, ScanError> {
    let names = list_directory(dir)?;
    let outcome = scan(&names);

    log_scan_complete(
        &dir.display().to_string(),
        outcome.index.len(),
        outcome.index.document_count(),
        outcome.collisions.len(),
    );

    Ok(outcome)
}
