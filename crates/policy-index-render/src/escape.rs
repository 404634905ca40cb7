//! Escaping for text placed into HTML and Markdown

pub(crate) fn escape_html_text(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                _ => escaped.push(ch),
            }
            escaped
        })
}

pub(crate) fn escape_html_attr(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
            escaped
        })
}

/// Backslash-escape characters that would change inline Markdown formatting
pub(crate) fn escape_markdown_text(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            if matches!(ch, '\\' | '*' | '_' | '`' | '[' | ']') {
                escaped.push('\\');
            }
            escaped.push(ch);
            escaped
        })
}

/// Percent-encode characters that would end a Markdown link target early
pub(crate) fn escape_link_target(target: &str) -> String {
    target
        .chars()
        .fold(String::with_capacity(target.len()), |mut escaped, ch| {
            match ch {
                ' ' => escaped.push_str("%20"),
                '(' => escaped.push_str("%28"),
                ')' => escaped.push_str("%29"),
                '<' => escaped.push_str("%3C"),
                '>' => escaped.push_str("%3E"),
                _ => escaped.push(ch),
            }
            escaped
        })
}
