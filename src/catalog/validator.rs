//! Concurrent validation of catalog batches.

use std::collections::BTreeSet;
use std::path::{
    Path,
    PathBuf,
};

use futures::stream::{
    self,
    StreamExt,
};

use super::locator::find_catalog_files;
use super::types::{
    BatchOutcome,
    CatalogError,
};
use crate::analyzer::RuleOptions;
use crate::config::LintSettings;
use crate::input::{
    StringCatalog,
    language_from_path,
    parse_xliff_with_options,
};
use crate::types::TranslationError;

/// Sorted union of every language the catalogs mention.
#[must_use]
pub fn discover_languages(catalogs: &[StringCatalog]) -> Vec<String> {
    catalogs.iter().flat_map(StringCatalog::languages).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Read a whole catalog file.
async fn read(path: &Path) -> Result<Vec<u8>, CatalogError> {
    tokio::fs::read(path).await.map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })
}

/// Read one XLIFF file and classify its units.
///
/// The language comes from the file name; a bad name fails before the read.
async fn check_xliff_file(
    path: &Path,
    options: RuleOptions,
) -> Result<Vec<TranslationError>, CatalogError> {
    let parse_error = |source| CatalogError::Parse { path: path.to_path_buf(), source };

    let language = language_from_path(path).map_err(parse_error)?;
    let bytes = read(path).await?;
    let errors = parse_xliff_with_options(&bytes, &language, options).map_err(parse_error)?;

    tracing::info!(path = %path.display(), language = %language, errors = errors.len(), "Checked XLIFF file");
    Ok(errors)
}

/// Read and deserialize one string catalog.
async fn load_string_catalog(path: &Path) -> Result<StringCatalog, CatalogError> {
    let bytes = read(path).await?;
    StringCatalog::from_slice(&bytes)
        .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })
}

/// Check XLIFF files, at most `concurrency` at a time.
///
/// A file that cannot be read or parsed is recorded in
/// [`BatchOutcome::failures`] and does not stop the others.
pub async fn validate_xliff_files(
    paths: &[PathBuf],
    options: RuleOptions,
    concurrency: usize,
) -> BatchOutcome {
    let results: Vec<_> = stream::iter(paths)
        .map(|path| check_xliff_file(path, options))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(errors) => outcome.errors.extend(errors),
            Err(failure) => {
                tracing::warn!("{failure}");
                outcome.failures.push(failure);
            }
        }
    }
    outcome
}

/// Check string catalogs for `languages`, at most `concurrency` files at a time.
///
/// With `languages` set to `None`, every language found across the catalogs
/// that parsed is checked.
pub async fn validate_string_catalogs(
    paths: &[PathBuf],
    languages: Option<&[String]>,
    concurrency: usize,
) -> BatchOutcome {
    let results: Vec<_> = stream::iter(paths)
        .map(|path| async move { (path, load_string_catalog(path).await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut outcome = BatchOutcome::default();
    let mut parsed_paths = Vec::with_capacity(results.len());
    let mut catalogs = Vec::with_capacity(results.len());
    for (path, result) in results {
        match result {
            Ok(catalog) => {
                parsed_paths.push(path);
                catalogs.push(catalog);
            }
            Err(failure) => {
                tracing::warn!("{failure}");
                outcome.failures.push(failure);
            }
        }
    }

    let languages = languages.map_or_else(|| discover_languages(&catalogs), <[String]>::to_vec);
    tracing::debug!(?languages, "Checking string catalogs");

    for (path, catalog) in parsed_paths.iter().zip(&catalogs) {
        let errors = catalog.validate(&languages);
        tracing::info!(path = %path.display(), errors = errors.len(), "Checked string catalog");
        outcome.errors.extend(errors);
    }
    outcome
}

/// Find and check every catalog under `root`.
///
/// # Errors
/// Returns [`CatalogError::Pattern`] when the configured patterns are invalid.
/// Per-file failures are reported in the returned outcome instead.
pub async fn lint_workspace(
    root: &Path,
    settings: &LintSettings,
) -> Result<BatchOutcome, CatalogError> {
    let files = find_catalog_files(root, settings)?;
    let concurrency = settings.indexing.concurrency();

    let mut outcome =
        validate_xliff_files(&files.xliff, settings.rule_options(), concurrency).await;
    outcome.merge(
        validate_string_catalogs(&files.string_catalogs, settings.languages.as_deref(), concurrency)
            .await,
    );

    Ok(outcome)
}
