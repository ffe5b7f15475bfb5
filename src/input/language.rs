//! Language derivation from catalog file names.

use std::ffi::OsStr;
use std::path::Path;

use super::ParseError;

/// Derive the language of an exported catalog from its file name.
///
/// The language is the leading dot-separated component of the file name,
/// so every unit in the file is attributed to it.
///
/// # Examples
/// - `Localized Contents/en.xliff` → `en`
/// - `es-MX.xliff` → `es-MX`
/// - `zh-Hans.lproj.xliff` → `zh-Hans`
///
/// # Errors
/// Returns [`ParseError::InvalidFileName`] when the path has no file name,
/// the file name is not valid UTF-8, or it starts with a dot (e.g. `.xliff`).
pub fn language_from_path(path: &Path) -> Result<String, ParseError> {
    let invalid = || ParseError::InvalidFileName { path: path.to_path_buf() };

    let file_name = path.file_name().and_then(OsStr::to_str).ok_or_else(invalid)?;
    let language = file_name.split('.').next().unwrap_or_default().trim();

    if language.is_empty() {
        return Err(invalid());
    }

    Ok(language.to_string())
}
