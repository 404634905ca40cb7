use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use policy_index_utils::error::ConfigError;
use policy_index_utils::types::ConfigSource;

/// Default README location, relative to the base directory
pub const DEFAULT_README: &str = "README.md";

/// Default index page location, relative to the base directory
pub const DEFAULT_INDEX: &str = "index.html";

/// What to do when two files claim the same document slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnCollision {
    /// Keep the later file, print a warning and continue (default)
    #[default]
    Warn,
    /// Abort before writing anything
    Fail,
}

impl fmt::Display for OnCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for OnCollision {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            other => Err(ConfigError::InvalidValue {
                key: "scan.on_collision".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Built-in label table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese (default)
    #[default]
    Zh,
    En,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => Err(ConfigError::InvalidValue {
                key: "render.locale".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Resolved input and output locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Directory scanned for policy pages
    pub dir: PathBuf,
    /// README whose marker block is regenerated
    pub readme: PathBuf,
    /// Generated index page
    pub index: PathBuf,
}

impl PathsConfig {
    /// Default layout under `base`: scan `base`, write `README.md` and
    /// `index.html` next to it.
    #[must_use]
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            dir: base.to_path_buf(),
            readme: base.join(DEFAULT_README),
            index: base.join(DEFAULT_INDEX),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new("."))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub on_collision: OnCollision,
}

/// Label selection and overrides for the rendered outputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub locale: Locale,
    /// Replaces the locale's `<title>`
    pub title: Option<String>,
    /// Replaces the locale's `<h1>`
    pub heading: Option<String>,
    /// Replaces the locale's footer line
    pub footer: Option<String>,
    /// Extra or replacement language labels, keyed by tag
    pub languages: BTreeMap<String, String>,
}

/// Configuration for one policy-index run.
///
/// Built by [`Config::discover_from()`] (CLI > file > defaults) or by
/// [`Config::builder()`] for programmatic use. Every resolved value records
/// where it came from in `source_attribution`.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    pub scan: ScanConfig,
    pub render: RenderConfig,
    /// Where each key's value came from, keyed by dotted name (`paths.dir`)
    pub source_attribution: HashMap<String, ConfigSource>,
    /// Config file that contributed values, if any
    pub config_file: Option<PathBuf>,
}

/// CLI arguments relevant to configuration.
///
/// Raw strings are parsed and validated during discovery so that bad values
/// are reported as configuration errors.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub readme: Option<PathBuf>,
    pub index: Option<PathBuf>,
    pub locale: Option<String>,
    pub on_collision: Option<String>,
}
