//! Rule evaluation for a single translation unit.

use crate::types::{
    ErrorKind,
    TranslationError,
    TranslationUnit,
};

/// State marker the exporter writes on values nobody has reviewed yet.
const NOT_YET_LOCALIZED_STATE: &str = "new";

/// Toggles for the configurable rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    /// Report values identical to their key.
    ///
    /// Catalogs keyed by opaque identifiers rather than source text can turn this off.
    pub check_equal_to_key: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self { check_equal_to_key: true }
    }
}

/// Classify one translated value.
///
/// Rules are checked in a fixed order and the first match wins:
/// 1. empty `text` → [`ErrorKind::Empty`]
/// 2. `text == key` (when `check_equal_to_key`) → [`ErrorKind::EqualToKey`]
/// 3. trimmed `state == "new"` → [`ErrorKind::NotYetLocalized`]
///
/// `text` is expected to be trimmed already.
#[must_use]
pub fn validate_unit(
    text: &str,
    key: &str,
    state: Option<&str>,
    check_equal_to_key: bool,
) -> Option<ErrorKind> {
    if text.is_empty() {
        return Some(ErrorKind::Empty);
    }

    if check_equal_to_key && text == key {
        return Some(ErrorKind::EqualToKey);
    }

    if state.map(str::trim) == Some(NOT_YET_LOCALIZED_STATE) {
        return Some(ErrorKind::NotYetLocalized);
    }

    None
}

/// Classify a parsed unit into at most one finding.
#[must_use]
pub fn check_unit(unit: &TranslationUnit, options: RuleOptions) -> Option<TranslationError> {
    validate_unit(&unit.text, &unit.key, unit.state.as_deref(), options.check_equal_to_key)
        .map(|kind| TranslationError::new(unit.language.clone(), unit.key.clone(), kind))
}
