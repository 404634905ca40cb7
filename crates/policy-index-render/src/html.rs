//! Standalone index page rendering

use policy_index_scanner::{PolicyIndex, PolicyKind};

use crate::escape::{escape_html_attr, escape_html_text};
use crate::labels::LabelSet;

/// Inline stylesheet; the page has no external assets
const STYLE: &str = r#"    /* Reset and base */
    body {
      margin: 0; padding: 0;
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
      background: #f5f7fa;
      color: #222;
      font-size: 16px;
      line-height: 1.6;
    }
    .container {
      max-width: 680px;
      margin: 48px auto;
      padding: 0 24px;
    }
    h1 {
      font-weight: 800;
      font-size: 2.4rem;
      color: #0b2545;
      margin-bottom: 48px;
      text-align: center;
      letter-spacing: 0.06em;
    }
    .app-entry {
      margin-bottom: 56px;
    }
    .app-name {
      font-weight: 700;
      font-size: 1.5rem;
      color: #0b2545;
      margin-bottom: 24px;
      border-bottom: 1px solid #d9e2ec;
      padding-bottom: 8px;
    }
    .policy-type {
      margin-bottom: 18px;
      display: flex;
      align-items: center;
      flex-wrap: wrap;
    }
    .policy-label {
      flex-shrink: 0;
      font-weight: 600;
      color: #334e68;
      width: 90px;
      letter-spacing: 0.04em;
    }
    .policy-links {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
    }
    .policy-links a {
      color: #1c7ed6;
      font-weight: 500;
      text-decoration: none;
      font-size: 1rem;
      padding: 4px 10px;
      border-radius: 4px;
      transition: background-color 0.25s ease, color 0.25s ease;
    }
    .policy-links a:hover {
      background-color: #1c7ed6;
      color: #fff;
    }
    .policy-links .no-link {
      color: #aab8c2;
      font-style: italic;
      cursor: default;
    }
    .footer {
      text-align: center;
      font-size: 14px;
      color: #768390;
      padding-bottom: 24px;
      user-select: none;
    }
    @media (max-width: 480px) {
      .app-name {
        font-size: 1.3rem;
      }
      .policy-label {
        width: 100%;
        margin-bottom: 6px;
      }
      .policy-type {
        flex-direction: column;
        align-items: flex-start;
        margin-bottom: 28px;
      }
    }
"#;

/// Render the complete index page.
///
/// Every application gets an `.app-entry` block with one `.policy-type` row
/// per kind, in display order. A row lists one anchor per language variant
/// (neutral first) or a `.no-link` placeholder. An empty index still yields
/// the full page shell. Output is deterministic for a given index and labels.
#[must_use]
pub fn render_index_html(index: &PolicyIndex, labels: &LabelSet) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html lang=\"{}\">\n",
        escape_html_attr(&labels.html_lang)
    ));
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "  <title>{}</title>\n",
        escape_html_text(&labels.title)
    ));
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("  <style>\n");
    html.push_str(STYLE);
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("  <div class=\"container\">\n");
    html.push_str(&format!(
        "    <h1>{}</h1>\n",
        escape_html_text(&labels.heading)
    ));

    for (app, policies) in index.iter() {
        html.push_str("    <div class=\"app-entry\">\n");
        html.push_str(&format!(
            "      <div class=\"app-name\">{}</div>\n",
            escape_html_text(app.as_str())
        ));

        for kind in PolicyKind::ALL {
            html.push_str("      <div class=\"policy-type\">\n");
            html.push_str(&format!(
                "        <div class=\"policy-label\">{}</div>\n",
                escape_html_text(labels.html_kind(kind))
            ));
            html.push_str("        <div class=\"policy-links\">\n");

            match policies.variants(kind) {
                Some(variants) => {
                    for (slot, filename) in variants {
                        html.push_str(&format!(
                            "          <a href=\"{}\">{}</a>\n",
                            escape_html_attr(filename),
                            escape_html_text(labels.slot_label(slot))
                        ));
                    }
                }
                None => {
                    html.push_str(&format!(
                        "          <span class=\"no-link\">{}</span>\n",
                        escape_html_text(&labels.no_link)
                    ));
                }
            }

            html.push_str("        </div>\n");
            html.push_str("      </div>\n");
        }

        html.push_str("    </div>\n");
    }

    html.push('\n');
    html.push_str(&format!(
        "  <div class=\"footer\">{}</div>\n",
        escape_html_text(&labels.footer)
    ));
    html.push_str("  </div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_index_scanner::scan;

    #[test]
    fn test_empty_index_yields_full_shell() {
        let outcome = scan(Vec::<String>::new());
        let html = render_index_html(&outcome.index, &LabelSet::zh());

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"zh\">\n"));
        assert!(html.contains("<title>协议合集</title>"));
        assert!(html.contains("<h1>应用隐私与用户协议合集</h1>"));
        assert!(html.contains("<div class=\"footer\">页面由脚本自动生成</div>"));
        assert!(!html.contains("class=\"app-entry\""));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_rows_links_and_placeholders() {
        let outcome = scan([
            "my-app-privacy.html",
            "my-app-privacy.ja.html",
            "my-app-support.pt-BR.html",
        ]);
        let html = render_index_html(&outcome.index, &LabelSet::zh());

        assert_eq!(html.matches("class=\"app-entry\"").count(), 1);
        assert_eq!(html.matches("class=\"policy-type\"").count(), 3);
        assert!(html.contains("<div class=\"app-name\">My App</div>"));
        assert!(html.contains("<div class=\"policy-label\">隐私政策</div>"));

        let neutral = html.find("<a href=\"my-app-privacy.html\">默认</a>").unwrap();
        let japanese = html.find("<a href=\"my-app-privacy.ja.html\">日语</a>").unwrap();
        assert!(neutral < japanese);

        // Unknown tag falls back to the tag itself
        assert!(html.contains("<a href=\"my-app-support.pt-BR.html\">pt-BR</a>"));
        assert_eq!(html.matches("<span class=\"no-link\">无</span>").count(), 1);
    }

    #[test]
    fn test_kind_rows_follow_display_order() {
        let outcome = scan(["app-support.html", "app-user-agreement.html", "app-privacy.html"]);
        let html = render_index_html(&outcome.index, &LabelSet::en());

        let privacy = html.find(">Privacy Policy<").unwrap();
        let agreement = html.find(">User Agreement<").unwrap();
        let support = html.find(">Support<").unwrap();
        assert!(privacy < agreement && agreement < support);
    }

    #[test]
    fn test_names_and_hrefs_are_escaped() {
        let outcome = scan(["a&b-privacy.html", "it's-support.html"]);
        let html = render_index_html(&outcome.index, &LabelSet::en());

        assert!(html.contains("<div class=\"app-name\">A&amp;B</div>"));
        assert!(html.contains("href=\"a&amp;b-privacy.html\""));
        assert!(html.contains("href=\"it&#39;s-support.html\""));
    }

    #[test]
    fn test_render_is_deterministic() {
        let names = ["b-privacy.en.html", "a-privacy.html", "b-support.html"];
        let first = render_index_html(&scan(names).index, &LabelSet::zh());
        let second = render_index_html(&scan(names).index, &LabelSet::zh());
        assert_eq!(first, second);
    }
}
