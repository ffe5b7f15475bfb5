//! Grouping of findings by key and kind across languages.

use std::collections::BTreeMap;

use crate::types::{
    ErrorGroup,
    ErrorKind,
    TranslationError,
};

/// Regroup findings by key, then by kind, collecting the affected languages.
///
/// Groups come out sorted by key and then by [`ErrorKind`] order; languages keep
/// the order they were encountered in and are not deduplicated.
#[must_use]
pub fn aggregate(errors: Vec<TranslationError>) -> Vec<ErrorGroup> {
    let mut by_key: BTreeMap<String, BTreeMap<ErrorKind, Vec<String>>> = BTreeMap::new();

    for TranslationError { language, key, kind } in errors {
        by_key.entry(key).or_default().entry(kind).or_default().push(language);
    }

    by_key
        .into_iter()
        .flat_map(|(key, kinds)| {
            kinds.into_iter().map(move |(kind, languages)| ErrorGroup {
                kind,
                key: key.clone(),
                languages,
            })
        })
        .collect()
}
