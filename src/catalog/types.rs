//! Catalog batch type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;
use crate::input::ParseError;
use crate::types::TranslationError;

/// Errors raised while finding or checking catalog files.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when failing to read a catalog file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Error when a catalog file cannot be parsed
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// The file that could not be parsed
        path: PathBuf,
        /// What the parser rejected
        #[source]
        source: ParseError,
    },
    /// Error when the configured patterns cannot be compiled
    #[error(transparent)]
    Pattern(#[from] MatcherError),
}

/// Catalog files found under a root, each list sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFiles {
    /// XLIFF files, one language each.
    pub xliff: Vec<PathBuf>,
    /// `.xcstrings` files.
    pub string_catalogs: Vec<PathBuf>,
}

impl CatalogFiles {
    /// No catalog of either kind was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xliff.is_empty() && self.string_catalogs.is_empty()
    }
}

/// Merged result of validating many catalog files.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Findings of every file that parsed.
    pub errors: Vec<TranslationError>,
    /// Files that could not be read or parsed.
    pub failures: Vec<CatalogError>,
}

impl BatchOutcome {
    /// Append another outcome.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        self.failures.extend(other.failures);
    }
}
