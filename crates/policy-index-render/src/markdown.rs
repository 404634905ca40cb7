//! README list rendering

use policy_index_scanner::{AppPolicies, LanguageSlot, PolicyIndex, PolicyKind};

use crate::escape::{escape_link_target, escape_markdown_text};
use crate::labels::LabelSet;

/// Render the Markdown list that goes between the README markers.
///
/// One line per application:
///
/// ```text
/// - **My App**: 隐私协议: [默认](my-app-privacy.html) ｜ 用户协议: [en](my-app-user-agreement.en.html) ｜ *无技术支持*
/// ```
///
/// Tagged links show the raw tag; the neutral slot shows
/// [`LabelSet::neutral`]. An empty index renders the single
/// [`LabelSet::empty_index`] line. No trailing newline.
#[must_use]
pub fn render_markdown(index: &PolicyIndex, labels: &LabelSet) -> String {
    if index.is_empty() {
        return labels.empty_index.clone();
    }

    index
        .iter()
        .map(|(app, policies)| {
            let parts: Vec<String> = PolicyKind::ALL
                .iter()
                .map(|kind| render_kind(policies, *kind, labels))
                .collect();
            format!(
                "- **{}**: {}",
                escape_markdown_text(app.as_str()),
                parts.join(labels.separator.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_kind(policies: &AppPolicies, kind: PolicyKind, labels: &LabelSet) -> String {
    let label = labels.markdown_kind(kind);

    let Some(variants) = policies.variants(kind) else {
        return format!("*{}{label}*", labels.absent_prefix);
    };

    let links = variants
        .iter()
        .map(|(slot, filename)| {
            let text = match slot {
                LanguageSlot::Neutral => labels.neutral.as_str(),
                LanguageSlot::Tag(tag) => tag.as_str(),
            };
            format!(
                "[{}]({})",
                escape_markdown_text(text),
                escape_link_target(filename)
            )
        })
        .collect::<Vec<_>>()
        .join(" / ");

    format!("{label}: {links}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_index_scanner::scan;

    #[test]
    fn test_mixed_kinds_and_languages() {
        let outcome = scan([
            "my-app-privacy.html",
            "my-app-privacy.en.html",
            "my-app-user-agreement.en.html",
            "my-app-user-agreement.zh-Hans.html",
        ]);
        let markdown = render_markdown(&outcome.index, &LabelSet::zh());

        assert_eq!(
            markdown,
            "- **My App**: 隐私协议: [默认](my-app-privacy.html) / [en](my-app-privacy.en.html) ｜ \
             用户协议: [en](my-app-user-agreement.en.html) / [zh-Hans](my-app-user-agreement.zh-Hans.html) ｜ \
             *无技术支持*"
        );
    }

    #[test]
    fn test_one_line_per_application_in_order() {
        let outcome = scan(["zed-support.html", "alpha-privacy.de.html"]);
        let markdown = render_markdown(&outcome.index, &LabelSet::en());
        let lines: Vec<&str> = markdown.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "- **Alpha**: Privacy Policy: [de](alpha-privacy.de.html) | *No User Agreement* | *No Support*"
        );
        assert!(lines[1].starts_with("- **Zed**: *No Privacy Policy*"));
        assert!(!markdown.ends_with('\n'));
    }

    #[test]
    fn test_empty_index_renders_placeholder() {
        let outcome = scan(["README.md", "index.html"]);
        assert_eq!(
            render_markdown(&outcome.index, &LabelSet::zh()),
            "暂无隐私政策文件，请添加 HTML 文件到仓库。"
        );
    }

    #[test]
    fn test_markdown_special_characters_are_escaped() {
        let outcome = scan(["my_app-privacy.html"]);
        let markdown = render_markdown(&outcome.index, &LabelSet::zh());
        assert!(markdown.starts_with(r"- **My\_App**: "));
        assert!(markdown.contains("(my_app-privacy.html)"));
    }
}
