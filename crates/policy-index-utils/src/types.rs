//! Shared types used across policy-index crates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Source of a configuration value.
///
/// Precedence, highest first: CLI flag, config file, programmatic builder,
/// built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from the configuration file at the given path.
    ConfigFile(PathBuf),
    /// Value provided programmatically (e.g., `Config::builder()`).
    Programmatic,
    /// Built-in default value (lowest precedence).
    Default,
}

impl ConfigSource {
    /// Stable short label used in effective-config listings
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::ConfigFile(_) => "config",
            Self::Programmatic => "programmatic",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFile(path) => write!(f, "config ({})", path.display()),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_labels() {
        assert_eq!(ConfigSource::Cli.label(), "cli");
        assert_eq!(ConfigSource::Default.label(), "default");
        assert_eq!(
            ConfigSource::ConfigFile(PathBuf::from("/repo/.policy-index/config.toml")).label(),
            "config"
        );
    }

    #[test]
    fn test_config_file_display_includes_path() {
        let source = ConfigSource::ConfigFile(PathBuf::from("cfg.toml"));
        assert_eq!(source.to_string(), "config (cfg.toml)");
    }
}
