//! Filename grammar and application-name normalization
//!
//! ```text
//! <app-prefix>-(privacy|user-agreement|support)[.<lang>].html
//! ```
//!
//! `<app-prefix>` is matched lazily: the shortest prefix followed by a valid
//! `-<kind>` remainder wins. `<lang>` is `[A-Za-z-]+` so BCP 47 style
//! sub-tags such as `zh-Hans` are accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{ApplicationName, LanguageSlot, PolicyFile, PolicyKind};

/// Extension every candidate must carry
pub const HTML_EXTENSION: &str = ".html";

/// Prefix reserved for the generated index page
pub const INDEX_PREFIX: &str = "index";

static POLICY_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)-(privacy|user-agreement|support)(?:\.([A-Za-z-]+))?\.html$")
        .expect("policy filename pattern is valid")
});

/// Whether a directory entry is considered at all.
///
/// Excludes anything starting with `index` so the generated page is never
/// indexed as a policy document.
#[must_use]
pub fn is_candidate(name: &str) -> bool {
    name.ends_with(HTML_EXTENSION) && !name.starts_with(INDEX_PREFIX)
}

/// Decode a filename, or `None` if it is filtered out or does not match
#[must_use]
pub fn parse_filename(name: &str) -> Option<PolicyFile> {
    if !is_candidate(name) {
        return None;
    }

    let captures = POLICY_FILENAME.captures(name)?;
    let prefix = captures.get(1)?.as_str();
    let kind = PolicyKind::from_token(captures.get(2)?.as_str())?;
    let language = LanguageSlot::from(captures.get(3).map(|m| m.as_str()));

    Some(PolicyFile {
        filename: name.to_string(),
        app: normalize_app_name(prefix),
        kind,
        language,
    })
}

/// Turn a filename prefix into an [`ApplicationName`].
///
/// Hyphens become spaces, then the result is title-cased: a cased letter
/// that follows a cased character of the output is lower-cased, every other
/// cased letter is upper-cased. So `my-app` → `My App`, `APP` → `App`,
/// `app2go` → `App2Go`. Uncased characters (digits, CJK) pass through.
///
/// Purely syntactic and idempotent.
#[must_use]
pub fn normalize_app_name(prefix: &str) -> ApplicationName {
    let mut name = String::with_capacity(prefix.len());
    let mut previous_is_cased = false;

    for ch in prefix.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        push_title_cased(&mut name, &mut previous_is_cased, ch, true);
    }

    ApplicationName::new(name)
}

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase()
}

/// Push `ch` under the title-case rule, tracking whether the last pushed
/// character is cased.
///
/// Multi-char upper-case expansions (`ß` → `SS`, `ŉ` → `ʼN`) are fed back
/// through the rule one level deep so their tail is cased against what was
/// actually emitted.
fn push_title_cased(name: &mut String, previous_is_cased: &mut bool, ch: char, expand: bool) {
    if !is_cased(ch) {
        name.push(ch);
        *previous_is_cased = false;
        return;
    }

    if *previous_is_cased {
        for lower in ch.to_lowercase() {
            name.push(lower);
            *previous_is_cased = is_cased(lower);
        }
        return;
    }

    let upper = ch.to_uppercase();
    if expand && upper.len() > 1 {
        for part in upper {
            push_title_cased(name, previous_is_cased, part, false);
        }
    } else {
        for part in upper {
            name.push(part);
            *previous_is_cased = is_cased(part);
        }
    }
}
