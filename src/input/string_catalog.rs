//! String catalog (`.xcstrings`) documents.
//!
//! Only the fields needed for linting are modeled; everything else in the
//! document (`version`, `comment`, `extractionState`, `variations`, ...) is ignored.

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use serde::Deserialize;

use super::ParseError;
use crate::types::{
    ErrorKind,
    TranslationError,
};

/// A string catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringCatalog {
    /// Development language of the catalog.
    #[serde(default)]
    pub source_language: Option<String>,
    /// Key → entry.
    pub strings: BTreeMap<String, StringEntry>,
}

/// One localizable string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StringEntry {
    /// Language → localized value.
    #[serde(default)]
    pub localizations: BTreeMap<String, Localization>,
}

/// The localized form of a string in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    /// Plain value; absent for plural or device variations.
    #[serde(default)]
    pub string_unit: Option<StringUnit>,
}

/// A plain localized value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StringUnit {
    /// Review state (`new`, `translated`, `needs_review`, ...); not used by the rules.
    #[serde(default)]
    pub state: Option<String>,
    /// The localized text.
    #[serde(default)]
    pub value: Option<String>,
}

impl StringCatalog {
    /// Deserialize a catalog from raw JSON.
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedDocument`] when the bytes are not JSON or
    /// the document does not have a `strings` mapping of the expected shape.
    pub fn from_slice(json: &[u8]) -> Result<Self, ParseError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Source language plus every language any entry is localized into.
    #[must_use]
    pub fn languages(&self) -> BTreeSet<String> {
        self.source_language
            .iter()
            .cloned()
            .chain(self.strings.values().flat_map(|entry| entry.localizations.keys().cloned()))
            .collect()
    }

    /// Check every (key, language) pair, keys in sorted order and languages in the given order.
    ///
    /// Missing localizations count as empty. Values are compared as-is, without trimming.
    #[must_use]
    pub fn validate(&self, languages: &[String]) -> Vec<TranslationError> {
        let mut errors = Vec::new();

        for (key, entry) in &self.strings {
            for language in languages {
                if let Some(kind) = classify(key, entry.localizations.get(language)) {
                    errors.push(TranslationError::new(language.clone(), key.clone(), kind));
                }
            }
        }

        errors
    }
}

/// Classify one localization of `key`.
fn classify(key: &str, localization: Option<&Localization>) -> Option<ErrorKind> {
    let value = localization
        .and_then(|localization| localization.string_unit.as_ref())
        .and_then(|unit| unit.value.as_deref());

    match value {
        None | Some("") => Some(ErrorKind::Empty),
        Some(value) if value == key => Some(ErrorKind::EqualToKey),
        Some(_) => None,
    }
}

/// Parse one string catalog and check it for the requested languages.
///
/// # Errors
/// See [`StringCatalog::from_slice`].
pub fn parse_resource_document(
    json: &[u8],
    languages: &[String],
) -> Result<Vec<TranslationError>, ParseError> {
    let catalog = StringCatalog::from_slice(json)?;
    let errors = catalog.validate(languages);
    tracing::debug!(keys = catalog.strings.len(), errors = errors.len(), "Checked string catalog");
    Ok(errors)
}
