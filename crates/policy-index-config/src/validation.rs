use std::path::Path;

use policy_index_utils::error::ConfigError;

use super::Config;

/// Reject an empty path value for `key`
pub(crate) fn require_non_empty_path(key: &str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: "path must not be empty".to_string(),
        });
    }
    Ok(())
}

impl Config {
    /// Validate configuration values
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty_path("paths.dir", &self.paths.dir)?;
        require_non_empty_path("paths.readme", &self.paths.readme)?;
        require_non_empty_path("paths.index", &self.paths.index)?;

        if self.paths.readme == self.paths.index {
            return Err(ConfigError::InvalidValue {
                key: "paths.index".to_string(),
                value: format!(
                    "{} is also the README; the two outputs must differ",
                    self.paths.index.display()
                ),
            });
        }

        for (key, value) in [
            ("render.title", &self.render.title),
            ("render.heading", &self.render.heading),
            ("render.footer", &self.render.footer),
        ] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: "must not be blank; remove the key to use the locale default"
                        .to_string(),
                });
            }
        }

        for (tag, label) in &self.render.languages {
            let valid_tag = !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphabetic() || c == '-');
            if !valid_tag {
                return Err(ConfigError::InvalidValue {
                    key: "render.languages".to_string(),
                    value: format!("'{tag}' is not a language tag (letters and hyphens only)"),
                });
            }
            if label.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "render.languages".to_string(),
                    value: format!("label for '{tag}' must not be blank"),
                });
            }
        }

        Ok(())
    }
}
