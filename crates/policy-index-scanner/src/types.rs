//! Value types for discovered policy documents

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Kind of policy document.
///
/// Variant order is the fixed display order: privacy, user agreement, support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    Privacy,
    UserAgreement,
    Support,
}

impl PolicyKind {
    /// All kinds in display order
    pub const ALL: [PolicyKind; 3] = [Self::Privacy, Self::UserAgreement, Self::Support];

    /// Token used in filenames
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Privacy => "privacy",
            Self::UserAgreement => "user-agreement",
            Self::Support => "support",
        }
    }

    /// Parse a filename token; anything outside the closed set is `None`
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "privacy" => Some(Self::Privacy),
            "user-agreement" => Some(Self::UserAgreement),
            "support" => Some(Self::Support),
            _ => None,
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable application name derived from a filename prefix.
///
/// Ordering is ordinal on the underlying string (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationName(String);

impl ApplicationName {
    /// Wrap an already-normalized name
    pub(crate) fn new(name: String) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ApplicationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Language position of a document within one (application, kind) pair.
///
/// `Neutral` is a document without a language tag. It sorts before every
/// tagged variant; tags sort ordinally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageSlot {
    Neutral,
    Tag(String),
}

impl LanguageSlot {
    /// The tag, if any
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Neutral => None,
            Self::Tag(tag) => Some(tag),
        }
    }
}

impl From<Option<&str>> for LanguageSlot {
    fn from(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) => Self::Tag(tag.to_string()),
            None => Self::Neutral,
        }
    }
}

impl fmt::Display for LanguageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => f.write_str("(neutral)"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// A filename that matched the grammar, with its decoded parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFile {
    pub filename: String,
    pub app: ApplicationName,
    pub kind: PolicyKind,
    pub language: LanguageSlot,
}

/// Flattened view of one index entry, used for JSON summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub app: ApplicationName,
    pub kind: PolicyKind,
    /// `None` for a language-neutral document
    pub language: Option<String>,
    pub filename: String,
}
