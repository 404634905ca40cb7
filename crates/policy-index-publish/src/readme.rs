//! README update

use camino::Utf8Path;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use policy_index_utils::atomic_write::write_file_atomic;
use policy_index_utils::error::ReadmeError;

use crate::WriteMode;
use crate::markers::replace_generated_block;

/// What happened to the README
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadmeOutcome {
    /// No README at the path; nothing was done
    Missing,
    /// The marker block already holds the rendered list
    Unchanged,
    /// The marker block was rewritten
    Updated,
    /// Check mode: the marker block differs from the rendered list
    Stale,
}

/// Splice `body` into the README at `path`.
///
/// A missing file is not an error. Invalid markers are, and leave the file
/// untouched. The file is only rewritten when its content would change.
pub fn update_readme(path: &Path, body: &str, mode: WriteMode) -> Result<ReadmeOutcome, ReadmeError> {
    let path_str = path.display().to_string();

    let current = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path_str, "README not found; skipping update");
            return Ok(ReadmeOutcome::Missing);
        }
        Err(e) => {
            return Err(ReadmeError::ReadFailed {
                path: path_str,
                reason: e.to_string(),
            });
        }
    };

    let updated = replace_generated_block(&current, body).map_err(|source| ReadmeError::Markers {
        path: path_str.clone(),
        source,
    })?;

    if updated == current {
        debug!(path = %path_str, "README already up to date");
        return Ok(ReadmeOutcome::Unchanged);
    }

    if mode.is_check() {
        info!(path = %path_str, "README generated block is stale");
        return Ok(ReadmeOutcome::Stale);
    }

    let utf8_path = Utf8Path::from_path(path).ok_or_else(|| ReadmeError::WriteFailed {
        path: path_str.clone(),
        reason: "path is not valid UTF-8".to_string(),
    })?;
    let result = write_file_atomic(utf8_path, &updated).map_err(|e| ReadmeError::WriteFailed {
        path: path_str.clone(),
        reason: format!("{e:#}"),
    })?;
    for warning in &result.warnings {
        warn!(path = %path_str, "{warning}");
    }

    info!(path = %path_str, "README updated");
    Ok(ReadmeOutcome::Updated)
}
