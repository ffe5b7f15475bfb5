//! Core types used throughout the project.

use std::fmt;

/// A single translated value extracted from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationUnit {
    /// Language the value belongs to (e.g. `en`, `es`).
    pub language: String,
    /// Source-language identifier the value is keyed by.
    pub key: String,
    /// Concatenated and trimmed target content.
    pub text: String,
    /// Reviewer-assigned state, if any (e.g. `new`, `translated`).
    pub state: Option<String>,
}

/// The reason a translation unit was flagged.
///
/// Variant order is the order groups are listed for a key in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// Nothing was translated.
    Empty,
    /// The value is the key itself, usually a copied source string.
    EqualToKey,
    /// The exporter still marks the value as `new`.
    NotYetLocalized,
}

impl ErrorKind {
    /// Every kind, in report order.
    pub const ALL: [Self; 3] = [Self::Empty, Self::EqualToKey, Self::NotYetLocalized];

    /// Human readable phrase used in the human report.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Empty => "empty translation",
            Self::EqualToKey => "content equal to key",
            Self::NotYetLocalized => "no localized",
        }
    }

    /// Machine token used in the compiler-style report.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Empty => "empty_translation",
            Self::EqualToKey => "content_equal_to_key",
            Self::NotYetLocalized => "no_localized",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A finding for one key in one language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationError {
    /// Language of the offending value.
    pub language: String,
    /// Key of the offending value.
    pub key: String,
    /// What is wrong with it.
    pub kind: ErrorKind,
}

impl TranslationError {
    /// Creates a finding.
    #[must_use]
    pub fn new(language: impl Into<String>, key: impl Into<String>, kind: ErrorKind) -> Self {
        Self { language: language.into(), key: key.into(), kind }
    }
}

/// Findings sharing the same key and kind, across languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorGroup {
    /// Shared kind.
    pub kind: ErrorKind,
    /// Shared key.
    pub key: String,
    /// One entry per contributing finding, in the order they were encountered.
    pub languages: Vec<String>,
}
