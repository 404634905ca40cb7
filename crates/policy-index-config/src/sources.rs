use std::collections::BTreeMap;

use super::{Config, ConfigSource};

fn source_label(source: Option<&ConfigSource>) -> &'static str {
    source.unwrap_or(&ConfigSource::Default).label()
}

impl Config {
    /// Effective configuration as `key -> (value, source label)`, sorted by key
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let mut config = BTreeMap::new();

        let mut add_config = |key: &str, value: Option<String>| {
            if let Some(val) = value {
                let source = source_label(self.source_attribution.get(key));
                config.insert(key.to_string(), (val, source.to_string()));
            }
        };

        add_config("paths.dir", Some(self.paths.dir.display().to_string()));
        add_config("paths.readme", Some(self.paths.readme.display().to_string()));
        add_config("paths.index", Some(self.paths.index.display().to_string()));
        add_config("scan.on_collision", Some(self.scan.on_collision.to_string()));
        add_config("render.locale", Some(self.render.locale.to_string()));
        add_config("render.title", self.render.title.clone());
        add_config("render.heading", self.render.heading.clone());
        add_config("render.footer", self.render.footer.clone());

        if !self.render.languages.is_empty() {
            let languages = self
                .render
                .languages
                .iter()
                .map(|(tag, label)| format!("{tag}={label}"))
                .collect::<Vec<_>>()
                .join(", ");
            add_config("render.languages", Some(languages));
        }

        config
    }
}
