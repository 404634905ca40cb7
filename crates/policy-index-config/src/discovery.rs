use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

use policy_index_utils::error::ConfigError;

use super::validation::require_non_empty_path;
use super::{CliArgs, Config, ConfigSource, Locale, OnCollision, PathsConfig, RenderConfig, ScanConfig};

/// Directory holding the configuration file
pub const CONFIG_DIR: &str = ".policy-index";

/// Configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Markers that stop the upward search
const REPO_ROOT_MARKERS: [&str; 3] = [".git", ".hg", ".svn"];

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    paths: Option<TomlPaths>,
    scan: Option<TomlScan>,
    render: Option<TomlRender>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPaths {
    dir: Option<PathBuf>,
    readme: Option<PathBuf>,
    index: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlScan {
    on_collision: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRender {
    locale: Option<String>,
    title: Option<String>,
    heading: Option<String>,
    footer: Option<String>,
    languages: Option<BTreeMap<String, String>>,
}

impl Config {
    /// Discover and load configuration starting from `start_dir`, with
    /// precedence CLI > file > defaults
    ///
    /// The CLI passes the working directory; tests pass a temp dir.
    /// Default paths and relative CLI paths resolve against `start_dir`;
    /// paths from a config file resolve against the directory that holds
    /// `.policy-index/`.
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut source_attribution = HashMap::new();

        let mut paths = PathsConfig::rooted_at(start_dir);
        let mut scan = ScanConfig::default();
        let mut render = RenderConfig::default();

        for key in [
            "paths.dir",
            "paths.readme",
            "paths.index",
            "scan.on_collision",
            "render.locale",
        ] {
            source_attribution.insert(key.to_string(), ConfigSource::Default);
        }

        let config_path = match &cli_args.config_path {
            Some(explicit) => {
                let explicit = start_dir.join(explicit);
                if !explicit.is_file() {
                    return Err(ConfigError::NotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Some(explicit)
            }
            None => Self::discover_config_file_from(start_dir),
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "Loading configuration file");
            let file_config = Self::load_config_file(path)?;
            let config_source = ConfigSource::ConfigFile(path.clone());
            let root = config_root(path);

            if let Some(file_paths) = file_config.paths {
                if let Some(dir) = file_paths.dir {
                    require_non_empty_path("paths.dir", &dir)?;
                    paths.dir = root.join(dir);
                    source_attribution.insert("paths.dir".to_string(), config_source.clone());
                }
                if let Some(readme) = file_paths.readme {
                    require_non_empty_path("paths.readme", &readme)?;
                    paths.readme = root.join(readme);
                    source_attribution.insert("paths.readme".to_string(), config_source.clone());
                }
                if let Some(index) = file_paths.index {
                    require_non_empty_path("paths.index", &index)?;
                    paths.index = root.join(index);
                    source_attribution.insert("paths.index".to_string(), config_source.clone());
                }
            }

            if let Some(file_scan) = file_config.scan
                && let Some(on_collision) = file_scan.on_collision
            {
                scan.on_collision = on_collision.parse::<OnCollision>()?;
                source_attribution.insert("scan.on_collision".to_string(), config_source.clone());
            }

            if let Some(file_render) = file_config.render {
                if let Some(locale) = file_render.locale {
                    render.locale = locale.parse::<Locale>()?;
                    source_attribution.insert("render.locale".to_string(), config_source.clone());
                }
                if file_render.title.is_some() {
                    render.title = file_render.title;
                    source_attribution.insert("render.title".to_string(), config_source.clone());
                }
                if file_render.heading.is_some() {
                    render.heading = file_render.heading;
                    source_attribution.insert("render.heading".to_string(), config_source.clone());
                }
                if file_render.footer.is_some() {
                    render.footer = file_render.footer;
                    source_attribution.insert("render.footer".to_string(), config_source.clone());
                }
                if let Some(languages) = file_render.languages {
                    render.languages = languages;
                    source_attribution.insert("render.languages".to_string(), config_source);
                }
            }
        }

        // Apply CLI overrides (highest priority)
        if let Some(dir) = &cli_args.dir {
            require_non_empty_path("paths.dir", dir)?;
            paths.dir = start_dir.join(dir);
            source_attribution.insert("paths.dir".to_string(), ConfigSource::Cli);
        }
        if let Some(readme) = &cli_args.readme {
            require_non_empty_path("paths.readme", readme)?;
            paths.readme = start_dir.join(readme);
            source_attribution.insert("paths.readme".to_string(), ConfigSource::Cli);
        }
        if let Some(index) = &cli_args.index {
            require_non_empty_path("paths.index", index)?;
            paths.index = start_dir.join(index);
            source_attribution.insert("paths.index".to_string(), ConfigSource::Cli);
        }
        if let Some(locale) = &cli_args.locale {
            render.locale = locale.parse::<Locale>()?;
            source_attribution.insert("render.locale".to_string(), ConfigSource::Cli);
        }
        if let Some(on_collision) = &cli_args.on_collision {
            scan.on_collision = on_collision.parse::<OnCollision>()?;
            source_attribution.insert("scan.on_collision".to_string(), ConfigSource::Cli);
        }

        let config = Self {
            paths,
            scan,
            render,
            source_attribution,
            config_file: config_path,
        };

        config.validate()?;

        Ok(config)
    }

    /// Discover the config file by searching upward from a given directory
    ///
    /// Walks up the directory tree looking for `.policy-index/config.toml`,
    /// stopping at repository root markers (.git, .hg, .svn) or the
    /// filesystem root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = Some(start_dir);

        while let Some(dir) = current_dir {
            let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            if REPO_ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()) {
                break;
            }

            current_dir = dir.parent();
        }

        None
    }

    /// Load configuration from a TOML file
    fn load_config_file(path: &Path) -> Result<TomlConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::InvalidFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::InvalidFile {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }
}

/// Directory that relative paths in `config_file` are resolved against.
///
/// For `<root>/.policy-index/config.toml` this is `<root>`; for a file
/// anywhere else it is the file's own directory.
fn config_root(config_file: &Path) -> PathBuf {
    let parent = config_file.parent().unwrap_or_else(|| Path::new("."));
    match parent.file_name() {
        Some(name) if name == CONFIG_DIR => parent.parent().unwrap_or(parent).to_path_buf(),
        _ => parent.to_path_buf(),
    }
}
