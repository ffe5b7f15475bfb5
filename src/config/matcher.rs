//! File pattern matcher for catalog files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::LintSettings;

/// Errors raised while compiling the configured patterns.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// An entry of `xliffPatterns` is not a valid glob
    #[error("Invalid XLIFF pattern '{pattern}': {source}")]
    InvalidXliffPattern {
        /// The rejected pattern
        pattern: String,
        /// Why globset rejected it
        #[source]
        source: globset::Error,
    },

    /// An entry of `stringCatalogPatterns` is not a valid glob
    #[error("Invalid string catalog pattern '{pattern}': {source}")]
    InvalidStringCatalogPattern {
        /// The rejected pattern
        pattern: String,
        /// Why globset rejected it
        #[source]
        source: globset::Error,
    },

    /// An entry of `excludePatterns` is not a valid glob
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The rejected pattern
        pattern: String,
        /// Why globset rejected it
        #[source]
        source: globset::Error,
    },

    /// The compiled patterns could not be combined
    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// The two catalog representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// One language per file, exported `.xliff`.
    Xliff,
    /// Every language in one `.xcstrings` JSON document.
    StringCatalog,
}

/// Matches files against configured glob patterns.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    /// Directory the patterns are relative to
    root: PathBuf,
    /// `xliffPatterns`
    xliff_set: GlobSet,
    /// `stringCatalogPatterns`
    string_catalog_set: GlobSet,
    /// `excludePatterns`
    exclude_set: GlobSet,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(root: PathBuf, settings: &LintSettings) -> Result<Self, MatcherError> {
        let xliff_set = Self::build_glob_set(&settings.xliff_patterns, |pattern, source| {
            MatcherError::InvalidXliffPattern { pattern, source }
        })?;

        let string_catalog_set =
            Self::build_glob_set(&settings.string_catalog_patterns, |pattern, source| {
                MatcherError::InvalidStringCatalogPattern { pattern, source }
            })?;

        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { root, xliff_set, string_catalog_set, exclude_set })
    }

    /// Compile `patterns`, reporting the first invalid one through `make_error`.
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Returns the catalog kind of a path, or `None` when it is not a catalog
    /// or matches `excludePatterns`.
    ///
    /// The path must be absolute and under the root.
    #[must_use]
    pub fn classify(&self, absolute_path: &Path) -> Option<CatalogKind> {
        let relative_path = absolute_path.strip_prefix(&self.root).ok()?;

        self.classify_relative(relative_path)
    }

    /// Same as [`Self::classify`] for a path relative to the root.
    #[must_use]
    pub fn classify_relative(&self, relative_path: &Path) -> Option<CatalogKind> {
        if self.exclude_set.is_match(relative_path) {
            return None;
        }

        if self.xliff_set.is_match(relative_path) {
            Some(CatalogKind::Xliff)
        } else if self.string_catalog_set.is_match(relative_path) {
            Some(CatalogKind::StringCatalog)
        } else {
            None
        }
    }
}
