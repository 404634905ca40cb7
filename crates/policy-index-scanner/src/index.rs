//! Grouping of parsed filenames into a [`PolicyIndex`]

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

use crate::grammar::parse_filename;
use crate::types::{ApplicationName, LanguageSlot, PolicyDocument, PolicyFile, PolicyKind};

/// Documents of one application: kind → language slot → filename
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppPolicies {
    kinds: BTreeMap<PolicyKind, BTreeMap<LanguageSlot, String>>,
}

impl AppPolicies {
    /// Variants for one kind, neutral slot first then tags in ordinal order.
    /// `None` when the application has no document of that kind.
    #[must_use]
    pub fn variants(&self, kind: PolicyKind) -> Option<&BTreeMap<LanguageSlot, String>> {
        self.kinds.get(&kind).filter(|variants| !variants.is_empty())
    }

    /// Filename occupying one exact slot
    #[must_use]
    pub fn get(&self, kind: PolicyKind, language: &LanguageSlot) -> Option<&str> {
        self.kinds
            .get(&kind)
            .and_then(|variants| variants.get(language))
            .map(String::as_str)
    }

    /// Kinds that have at least one document, in display order
    pub fn kinds(&self) -> impl Iterator<Item = PolicyKind> + '_ {
        self.kinds.keys().copied()
    }

    /// Total number of documents for this application
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.kinds.values().map(BTreeMap::len).sum()
    }

    /// Insert, returning the filename previously in the slot
    fn insert(&mut self, kind: PolicyKind, language: LanguageSlot, filename: String) -> Option<String> {
        self.kinds.entry(kind).or_default().insert(language, filename)
    }
}

/// Root structure: application → documents, applications in ordinal order.
///
/// Built fresh by every [`scan`]; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyIndex {
    apps: BTreeMap<ApplicationName, AppPolicies>,
}

impl PolicyIndex {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Number of applications
    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Applications in ordinal (case-sensitive) name order
    pub fn iter(&self) -> impl Iterator<Item = (&ApplicationName, &AppPolicies)> {
        self.apps.iter()
    }

    /// Look up an application by its normalized name
    #[must_use]
    pub fn app(&self, name: &str) -> Option<&AppPolicies> {
        self.apps.get(name)
    }

    /// Total number of documents across all applications
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.apps.values().map(AppPolicies::document_count).sum()
    }

    /// Flatten into documents: application, then kind, then language order
    #[must_use]
    pub fn documents(&self) -> Vec<PolicyDocument> {
        let mut documents = Vec::with_capacity(self.document_count());
        for (app, policies) in &self.apps {
            for (kind, variants) in &policies.kinds {
                for (language, filename) in variants {
                    documents.push(PolicyDocument {
                        app: app.clone(),
                        kind: *kind,
                        language: language.tag().map(str::to_string),
                        filename: filename.clone(),
                    });
                }
            }
        }
        documents
    }

    /// Insert a parsed file, returning the displaced filename on collision
    fn insert(&mut self, file: PolicyFile) -> Option<String> {
        self.apps
            .entry(file.app)
            .or_default()
            .insert(file.kind, file.language, file.filename)
    }
}

/// Two filenames resolved to the same (application, kind, language) slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub app: ApplicationName,
    pub kind: PolicyKind,
    pub language: Option<String>,
    /// Filename that was in the slot and got replaced
    pub replaced: String,
    /// Filename now occupying the slot
    pub winner: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.app, self.kind)?;
        if let Some(language) = &self.language {
            write!(f, " / {language}")?;
        }
        write!(f, ": {} replaced by {}", self.replaced, self.winner)
    }
}

/// Result of one scan
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub index: PolicyIndex,
    /// Collisions in the order they were encountered
    pub collisions: Vec<Collision>,
    /// Names examined
    pub considered: usize,
    /// Names that were filtered out or did not match the grammar
    pub skipped: usize,
}

impl ScanOutcome {
    #[must_use]
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Group a listing of filenames into a [`PolicyIndex`].
///
/// Pure: no filesystem access. Names are processed in the given order; when
/// two names resolve to the same slot the later one wins and a [`Collision`]
/// is recorded. Non-matching names are skipped silently.
pub fn scan<I, S>(names: I) -> ScanOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = ScanOutcome::default();

    for name in names {
        let name = name.as_ref();
        outcome.considered += 1;

        let Some(file) = parse_filename(name) else {
            debug!(filename = %name, "Skipping non-policy file");
            outcome.skipped += 1;
            continue;
        };

        let app = file.app.clone();
        let kind = file.kind;
        let language = file.language.tag().map(str::to_string);
        let winner = file.filename.clone();

        if let Some(replaced) = outcome.index.insert(file) {
            warn!(
                app = %app,
                kind = %kind,
                replaced = %replaced,
                winner = %winner,
                "Two files map to the same slot; keeping the later one"
            );
            outcome.collisions.push(Collision {
                app,
                kind,
                language,
                replaced,
                winner,
            });
        }
    }

    outcome
}
