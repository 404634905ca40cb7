use std::fmt;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type with user-friendly reporting.
///
/// `PolicyIndexError` is returned by the pipeline stages (config, scan,
/// README splice, index write). It provides:
/// - Detailed error information for programmatic handling
/// - User-friendly messages with context and suggestions
/// - Mapping to CLI exit codes via [`to_exit_code()`](Self::to_exit_code)
///
/// # Exit Code Mapping
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration/CLI argument errors |
/// | 3 | README marker errors |
/// | 4 | Rejected slot collisions |
/// | 5 | Stale outputs in check mode |
/// | 1 | Everything else |
///
/// Library code returns `PolicyIndexError` and does NOT call `std::process::exit()`.
#[derive(Error, Debug)]
pub enum PolicyIndexError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("README error: {0}")]
    Readme(#[from] ReadmeError),

    #[error("Index page write failed at {path}: {reason}")]
    IndexWriteFailed { path: String, reason: String },

    #[error("{count} slot collision(s) rejected")]
    CollisionsRejected { slots: Vec<String>, count: usize },

    #[error("Generated output is stale: {}", outputs.join(", "))]
    StaleOutputs { outputs: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Validation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::FileSystem => write!(f, "File System"),
            Self::Validation => write!(f, "Validation"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile { path, reason } => {
                format!("Configuration file {path} could not be parsed: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile { .. } => Some(
                "Configuration files are TOML with optional [paths], [scan] and [render] sections."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' option only accepts a fixed set of values."
            )),
            Self::NotFound { .. } => Some(
                "policy-index searches for .policy-index/config.toml from the current directory up to the repository root."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile { .. } => vec![
                "Check the TOML syntax of the configuration file".to_string(),
                "Remove unknown keys; the schema rejects them".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "locale" | "render.locale" => {
                    vec!["Use 'zh' or 'en' as the locale".to_string()]
                }
                "on_collision" | "scan.on_collision" => {
                    vec!["Use 'warn' or 'fail' as the collision policy".to_string()]
                }
                _ => vec![
                    "Remove the option to fall back to the default value".to_string(),
                ],
            },
            Self::NotFound { .. } => vec![
                "Check the path passed to --config".to_string(),
                "Omit --config to use discovery and built-in defaults".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Errors raised while listing the document directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list directory {dir}: {reason}")]
    ListFailed { dir: String, reason: String },
}

impl UserFriendlyError for ScanError {
    fn user_message(&self) -> String {
        match self {
            Self::ListFailed { dir, reason } => {
                format!("Could not read the document directory {dir}: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        Some("A missing directory is treated as empty; other listing errors stop the run.".to_string())
    }

    fn suggestions(&self) -> Vec<String> {
        vec![
            "Check that the directory is readable".to_string(),
            "Pass --dir to point at the directory holding the policy pages".to_string(),
        ]
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::FileSystem
    }
}

/// Problems with the generated-block markers inside a README
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("start marker not found")]
    MissingStart,

    #[error("end marker not found after the start marker")]
    MissingEnd,

    #[error("end marker appears before the start marker")]
    EndBeforeStart,

    #[error("start marker appears {count} times, expected exactly once")]
    DuplicateStart { count: usize },
}

/// README splice errors
#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("invalid generated-block markers in {path}: {source}")]
    Markers {
        path: String,
        #[source]
        source: MarkerError,
    },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl UserFriendlyError for ReadmeError {
    fn user_message(&self) -> String {
        match self {
            Self::Markers { path, source } => {
                format!("{path} has invalid auto-generated markers: {source}")
            }
            Self::ReadFailed { path, reason } => format!("Could not read {path}: {reason}"),
            Self::WriteFailed { path, reason } => format!("Could not update {path}: {reason}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Markers { .. } => Some(
                "The README must contain the start marker exactly once, followed later by the end marker."
                    .to_string(),
            ),
            Self::ReadFailed { .. } | Self::WriteFailed { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Markers { .. } => vec![
                "Add the line <!-- AUTO-GENERATED-LIST:START --> where the list should begin"
                    .to_string(),
                "Add the line <!-- AUTO-GENERATED-LIST:END --> after it".to_string(),
                "Remove duplicated marker lines".to_string(),
            ],
            Self::ReadFailed { .. } | Self::WriteFailed { .. } => vec![
                "Check file permissions on the README".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Markers { .. } => ErrorCategory::Validation,
            Self::ReadFailed { .. } | Self::WriteFailed { .. } => ErrorCategory::FileSystem,
        }
    }
}

impl UserFriendlyError for PolicyIndexError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Scan(err) => err.user_message(),
            Self::Readme(err) => err.user_message(),
            Self::IndexWriteFailed { path, reason } => {
                format!("Failed to write index page {path}: {reason}")
            }
            Self::CollisionsRejected { count, .. } => {
                format!("{count} document slot(s) claimed by more than one file")
            }
            Self::StaleOutputs { outputs } => {
                format!("Generated output is out of date: {}", outputs.join(", "))
            }
            Self::Io(err) => format!("File system operation failed: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Scan(err) => err.context(),
            Self::Readme(err) => err.context(),
            Self::CollisionsRejected { slots, .. } => Some(format!(
                "Conflicting slots: {}",
                slots.join("; ")
            )),
            Self::StaleOutputs { .. } => Some(
                "Check mode compares freshly rendered output with the files on disk without writing."
                    .to_string(),
            ),
            Self::IndexWriteFailed { .. } | Self::Io(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Scan(err) => err.suggestions(),
            Self::Readme(err) => err.suggestions(),
            Self::CollisionsRejected { .. } => vec![
                "Rename or delete one of the files for each conflicting slot".to_string(),
                "Filenames differing only in case or separators map to the same application"
                    .to_string(),
                "Set on_collision = \"warn\" to keep the last file found".to_string(),
            ],
            Self::StaleOutputs { .. } => {
                vec!["Run policy-index without --check and commit the result".to_string()]
            }
            Self::IndexWriteFailed { .. } | Self::Io(_) => vec![
                "Check write permissions on the output directory".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Scan(err) => err.category(),
            Self::Readme(err) => err.category(),
            Self::CollisionsRejected { .. } | Self::StaleOutputs { .. } => {
                ErrorCategory::Validation
            }
            Self::IndexWriteFailed { .. } | Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl PolicyIndexError {
    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// ```text
    /// Error: <user message>
    ///
    /// Context: <context if available>
    ///
    /// Suggestions:
    ///   • <suggestion 1>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the appropriate CLI exit code.
    ///
    /// This is the single source of truth for process exit codes.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::CLI_ARGS,
            Self::Readme(ReadmeError::Markers { .. }) => ExitCode::README_MARKERS,
            Self::CollisionsRejected { .. } => ExitCode::COLLISION_REJECTED,
            Self::StaleOutputs { .. } => ExitCode::STALE_OUTPUT,
            _ => ExitCode::INTERNAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_errors_map_to_readme_exit_code() {
        let err = PolicyIndexError::Readme(ReadmeError::Markers {
            path: "README.md".to_string(),
            source: MarkerError::MissingEnd,
        });
        assert_eq!(err.to_exit_code(), ExitCode::README_MARKERS);
    }

    #[test]
    fn test_readme_io_errors_are_internal() {
        let err = PolicyIndexError::Readme(ReadmeError::WriteFailed {
            path: "README.md".to_string(),
            reason: "permission denied".to_string(),
        });
        assert_eq!(err.to_exit_code(), ExitCode::INTERNAL);
    }

    #[test]
    fn test_exit_code_mapping() {
        let config = PolicyIndexError::Config(ConfigError::InvalidValue {
            key: "render.locale".to_string(),
            value: "fr".to_string(),
        });
        assert_eq!(config.to_exit_code(), ExitCode::CLI_ARGS);

        let collisions = PolicyIndexError::CollisionsRejected {
            slots: vec!["App / privacy".to_string()],
            count: 1,
        };
        assert_eq!(collisions.to_exit_code(), ExitCode::COLLISION_REJECTED);

        let stale = PolicyIndexError::StaleOutputs {
            outputs: vec!["index.html".to_string()],
        };
        assert_eq!(stale.to_exit_code(), ExitCode::STALE_OUTPUT);

        let io = PolicyIndexError::Io(std::io::Error::other("boom"));
        assert_eq!(io.to_exit_code(), ExitCode::INTERNAL);
    }

    #[test]
    fn test_display_for_user_includes_suggestions() {
        let err = PolicyIndexError::Readme(ReadmeError::Markers {
            path: "README.md".to_string(),
            source: MarkerError::DuplicateStart { count: 2 },
        });
        let message = err.display_for_user();

        assert!(message.starts_with("Error: README.md has invalid auto-generated markers"));
        assert!(message.contains("appears 2 times"));
        assert!(message.contains("Context:"));
        assert!(message.contains("Suggestions:"));
        assert!(message.contains("AUTO-GENERATED-LIST:END"));
    }

    #[test]
    fn test_categories() {
        let scan = PolicyIndexError::Scan(ScanError::ListFailed {
            dir: "docs".to_string(),
            reason: "denied".to_string(),
        });
        assert_eq!(scan.category(), ErrorCategory::FileSystem);

        let stale = PolicyIndexError::StaleOutputs { outputs: vec![] };
        assert_eq!(stale.category(), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::FileSystem.to_string(), "File System");
    }

    #[test]
    fn test_config_suggestions_depend_on_key() {
        let err = ConfigError::InvalidValue {
            key: "scan.on_collision".to_string(),
            value: "ignore".to_string(),
        };
        assert!(err.suggestions()[0].contains("'warn' or 'fail'"));
    }
}
