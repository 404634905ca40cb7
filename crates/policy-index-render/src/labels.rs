//! Display strings for the rendered outputs
//!
//! Two built-in tables (`zh`, the default, and `en`). Configuration can
//! replace the page title, heading and footer and add language labels.

use std::collections::BTreeMap;

use policy_index_config::{Locale, RenderConfig};
use policy_index_scanner::{LanguageSlot, PolicyKind};

/// Every string the renderers emit that is not taken from a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    /// Value of `<html lang>`
    pub html_lang: String,
    pub title: String,
    pub heading: String,
    pub footer: String,
    /// Kind labels in the README list, indexed in [`PolicyKind::ALL`] order
    pub markdown_kinds: [String; 3],
    /// Kind labels on the index page, indexed in [`PolicyKind::ALL`] order
    pub html_kinds: [String; 3],
    /// Prefix of the italic placeholder for a missing kind in the README
    pub absent_prefix: String,
    /// Placeholder text for a missing kind on the index page
    pub no_link: String,
    /// Link text for a document without a language tag
    pub neutral: String,
    /// Joins the per-kind parts of one README line
    pub separator: String,
    /// The single README line written when no documents exist
    pub empty_index: String,
    /// Display names for language tags; unknown tags are shown verbatim
    pub languages: BTreeMap<String, String>,
}

fn strings<const N: usize>(values: [&str; N]) -> [String; N] {
    values.map(str::to_string)
}

fn language_table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(tag, label)| ((*tag).to_string(), (*label).to_string()))
        .collect()
}

impl LabelSet {
    /// Simplified Chinese labels
    #[must_use]
    pub fn zh() -> Self {
        Self {
            html_lang: "zh".to_string(),
            title: "协议合集".to_string(),
            heading: "应用隐私与用户协议合集".to_string(),
            footer: "页面由脚本自动生成".to_string(),
            markdown_kinds: strings(["隐私协议", "用户协议", "技术支持"]),
            html_kinds: strings(["隐私政策", "用户协议", "技术支持"]),
            absent_prefix: "无".to_string(),
            no_link: "无".to_string(),
            neutral: "默认".to_string(),
            separator: " ｜ ".to_string(),
            empty_index: "暂无隐私政策文件，请添加 HTML 文件到仓库。".to_string(),
            languages: language_table(&[
                ("de", "德语"),
                ("en", "英语"),
                ("ja", "日语"),
                ("ko", "韩语"),
                ("zh-Hans", "简体中文"),
                ("zh-Hant", "繁体中文"),
            ]),
        }
    }

    /// English labels
    #[must_use]
    pub fn en() -> Self {
        Self {
            html_lang: "en".to_string(),
            title: "Policies".to_string(),
            heading: "App Privacy Policies and User Agreements".to_string(),
            footer: "This page is generated automatically".to_string(),
            markdown_kinds: strings(["Privacy Policy", "User Agreement", "Support"]),
            html_kinds: strings(["Privacy Policy", "User Agreement", "Support"]),
            absent_prefix: "No ".to_string(),
            no_link: "None".to_string(),
            neutral: "Default".to_string(),
            separator: " | ".to_string(),
            empty_index: "No policy documents yet. Add HTML files to the repository.".to_string(),
            languages: language_table(&[
                ("de", "German"),
                ("en", "English"),
                ("ja", "Japanese"),
                ("ko", "Korean"),
                ("zh-Hans", "Simplified Chinese"),
                ("zh-Hant", "Traditional Chinese"),
            ]),
        }
    }

    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Zh => Self::zh(),
            Locale::En => Self::en(),
        }
    }

    /// Locale table with the configured overrides applied
    #[must_use]
    pub fn from_config(render: &RenderConfig) -> Self {
        let mut labels = Self::for_locale(render.locale);
        if let Some(title) = &render.title {
            labels.title = title.clone();
        }
        if let Some(heading) = &render.heading {
            labels.heading = heading.clone();
        }
        if let Some(footer) = &render.footer {
            labels.footer = footer.clone();
        }
        labels.languages.extend(
            render
                .languages
                .iter()
                .map(|(tag, label)| (tag.clone(), label.clone())),
        );
        labels
    }

    fn kind_position(kind: PolicyKind) -> usize {
        match kind {
            PolicyKind::Privacy => 0,
            PolicyKind::UserAgreement => 1,
            PolicyKind::Support => 2,
        }
    }

    #[must_use]
    pub fn markdown_kind(&self, kind: PolicyKind) -> &str {
        &self.markdown_kinds[Self::kind_position(kind)]
    }

    #[must_use]
    pub fn html_kind(&self, kind: PolicyKind) -> &str {
        &self.html_kinds[Self::kind_position(kind)]
    }

    /// Display name for a language tag, the tag itself when unknown
    #[must_use]
    pub fn language<'a>(&'a self, tag: &'a str) -> &'a str {
        self.languages.get(tag).map_or(tag, String::as_str)
    }

    /// Link text for a slot on the index page
    #[must_use]
    pub fn slot_label<'a>(&'a self, slot: &'a LanguageSlot) -> &'a str {
        match slot {
            LanguageSlot::Neutral => &self.neutral,
            LanguageSlot::Tag(tag) => self.language(tag),
        }
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::zh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_and_html_kind_wording_differs_in_zh() {
        let labels = LabelSet::zh();
        assert_eq!(labels.markdown_kind(PolicyKind::Privacy), "隐私协议");
        assert_eq!(labels.html_kind(PolicyKind::Privacy), "隐私政策");
        assert_eq!(labels.html_kind(PolicyKind::Support), "技术支持");
    }

    #[test]
    fn test_unknown_language_falls_back_to_tag() {
        let labels = LabelSet::zh();
        assert_eq!(labels.language("ja"), "日语");
        assert_eq!(labels.language("pt-BR"), "pt-BR");
        assert_eq!(labels.slot_label(&LanguageSlot::Neutral), "默认");
    }

    #[test]
    fn test_config_overrides() {
        let mut render = RenderConfig {
            locale: Locale::En,
            footer: Some("Maintained by legal".to_string()),
            ..RenderConfig::default()
        };
        render.languages.insert("fr".to_string(), "French".to_string());
        render.languages.insert("de".to_string(), "Deutsch".to_string());

        let labels = LabelSet::from_config(&render);
        assert_eq!(labels.html_lang, "en");
        assert_eq!(labels.footer, "Maintained by legal");
        assert_eq!(labels.title, "Policies");
        assert_eq!(labels.language("fr"), "French");
        assert_eq!(labels.language("de"), "Deutsch");
        assert_eq!(labels.language("ko"), "Korean");
    }
}
