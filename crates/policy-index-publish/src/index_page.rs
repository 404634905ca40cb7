//! Index page output

use camino::Utf8Path;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use policy_index_utils::atomic_write::write_file_atomic;
use policy_index_utils::error::PolicyIndexError;

use crate::WriteMode;

/// What happened to the index page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexOutcome {
    /// Write mode: the page was (re)written
    Written,
    /// Check mode: the page on disk matches
    UpToDate,
    /// Check mode: the page is missing or differs
    Stale,
}

/// Write the rendered page to `path`, or compare against it in check mode.
///
/// Write mode always overwrites, through a temp file and rename, creating
/// parent directories as needed.
pub fn write_index(path: &Path, html: &str, mode: WriteMode) -> Result<IndexOutcome, PolicyIndexError> {
    let path_str = path.display().to_string();

    if mode.is_check() {
        // Unreadable or missing counts as stale
        let current = fs::read_to_string(path).ok();
        return Ok(if current.as_deref() == Some(html) {
            IndexOutcome::UpToDate
        } else {
            info!(path = %path_str, "Index page is stale");
            IndexOutcome::Stale
        });
    }

    let utf8_path = Utf8Path::from_path(path).ok_or_else(|| PolicyIndexError::IndexWriteFailed {
        path: path_str.clone(),
        reason: "path is not valid UTF-8".to_string(),
    })?;
    let result = write_file_atomic(utf8_path, html).map_err(|e| PolicyIndexError::IndexWriteFailed {
        path: path_str.clone(),
        reason: format!("{e:#}"),
    })?;
    for warning in &result.warnings {
        warn!(path = %path_str, "{warning}");
    }

    info!(path = %path_str, bytes = html.len(), "Index page written");
    Ok(IndexOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site").join("index.html");

        let outcome = write_index(&path, "<html></html>\n", WriteMode::Write).unwrap();
        assert_eq!(outcome, IndexOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>\n");
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.html");
        fs::write(&path, "same").unwrap();

        assert_eq!(
            write_index(&path, "same", WriteMode::Write).unwrap(),
            IndexOutcome::Written
        );
    }

    #[test]
    fn test_check_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.html");

        assert_eq!(
            write_index(&path, "page", WriteMode::Check).unwrap(),
            IndexOutcome::Stale
        );
        assert!(!path.exists());

        fs::write(&path, "page").unwrap();
        assert_eq!(
            write_index(&path, "page", WriteMode::Check).unwrap(),
            IndexOutcome::UpToDate
        );
        assert_eq!(
            write_index(&path, "other", WriteMode::Check).unwrap(),
            IndexOutcome::Stale
        );
    }
}
