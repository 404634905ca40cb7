use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use policy_index_utils::error::ConfigError;

use super::{Config, ConfigSource, Locale, OnCollision, PathsConfig, RenderConfig, ScanConfig};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// Use this when embedding policy-index without config file discovery.
    ///
    /// ```rust,no_run
    /// use policy_index_config::{Config, Locale};
    ///
    /// let config = Config::builder()
    ///     .base_dir("/srv/policies")
    ///     .locale(Locale::En)
    ///     .build()
    ///     .expect("valid config");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration.
///
/// Values set here are attributed to [`ConfigSource::Programmatic`]; anything
/// left unset keeps its built-in default. Relative paths resolve against
/// [`base_dir`](Self::base_dir) when one is given.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    base_dir: Option<PathBuf>,
    dir: Option<PathBuf>,
    readme: Option<PathBuf>,
    index: Option<PathBuf>,
    on_collision: Option<OnCollision>,
    locale: Option<Locale>,
    title: Option<String>,
    heading: Option<String>,
    footer: Option<String>,
    languages: BTreeMap<String, String>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory that defaults and relative paths are anchored to
    #[must_use]
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(path.into());
        self
    }

    /// Directory scanned for policy pages. Default: the base directory.
    #[must_use]
    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// README to update. Default: `README.md`.
    #[must_use]
    pub fn readme(mut self, path: impl Into<PathBuf>) -> Self {
        self.readme = Some(path.into());
        self
    }

    /// Index page to generate. Default: `index.html`.
    #[must_use]
    pub fn index(mut self, path: impl Into<PathBuf>) -> Self {
        self.index = Some(path.into());
        self
    }

    #[must_use]
    pub fn on_collision(mut self, policy: OnCollision) -> Self {
        self.on_collision = Some(policy);
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Add or replace the display label for one language tag
    #[must_use]
    pub fn language(mut self, tag: impl Into<String>, label: impl Into<String>) -> Self {
        self.languages.insert(tag.into(), label.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut source_attribution = HashMap::new();
        let mut attribute = |key: &str, set: bool| {
            let source = if set {
                ConfigSource::Programmatic
            } else {
                ConfigSource::Default
            };
            source_attribution.insert(key.to_string(), source);
        };

        attribute("paths.dir", self.dir.is_some());
        attribute("paths.readme", self.readme.is_some());
        attribute("paths.index", self.index.is_some());
        attribute("scan.on_collision", self.on_collision.is_some());
        attribute("render.locale", self.locale.is_some());
        if self.title.is_some() {
            attribute("render.title", true);
        }
        if self.heading.is_some() {
            attribute("render.heading", true);
        }
        if self.footer.is_some() {
            attribute("render.footer", true);
        }
        if !self.languages.is_empty() {
            attribute("render.languages", true);
        }

        let mut paths = match &self.base_dir {
            Some(base) => PathsConfig::rooted_at(base),
            None => PathsConfig::default(),
        };
        let anchor = |path: PathBuf| match &self.base_dir {
            Some(base) => base.join(path),
            None => path,
        };
        if let Some(dir) = self.dir.clone() {
            paths.dir = anchor(dir);
        }
        if let Some(readme) = self.readme.clone() {
            paths.readme = anchor(readme);
        }
        if let Some(index) = self.index.clone() {
            paths.index = anchor(index);
        }

        let config = Config {
            paths,
            scan: ScanConfig {
                on_collision: self.on_collision.unwrap_or_default(),
            },
            render: RenderConfig {
                locale: self.locale.unwrap_or_default(),
                title: self.title,
                heading: self.heading,
                footer: self.footer,
                languages: self.languages,
            },
            source_attribution,
            config_file: None,
        };

        config.validate()?;

        Ok(config)
    }
}
