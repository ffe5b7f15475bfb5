//! Settings types and their validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::analyzer::RuleOptions;
use crate::report::ReportFormat;

/// One problem found in the settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "xliffPatterns[0]")
    pub field_path: String,
    /// What is wrong, with an example of a valid value where it helps
    pub message: String,
}

impl ValidationError {
    /// Creates an error for `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every validation problem, in field order
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file exists but cannot be read
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`LintSettings`]
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list, one error per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lint settings, as read from `.xcloc-lint.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintSettings {
    /// Report XLIFF values identical to their key.
    ///
    /// String catalogs always report them.
    pub check_equal_to_key: bool,

    /// Languages string catalogs are checked for.
    ///
    /// - `None`: every language found in the catalogs (default)
    /// - `Some([...])`: only the listed languages
    pub languages: Option<Vec<String>>,

    /// Globs selecting XLIFF files, relative to the root.
    pub xliff_patterns: Vec<String>,
    /// Globs selecting `.xcstrings` files, relative to the root.
    pub string_catalog_patterns: Vec<String>,
    /// Globs of paths never checked. Wins over the two lists above.
    pub exclude_patterns: Vec<String>,

    /// Report printed on stdout.
    pub report_format: ReportFormat,

    /// Batch parsing settings.
    pub indexing: IndexingConfig,
}

/// Batch parsing settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexingConfig {
    /// Parallel file count for parsing.
    /// Default: 80% of CPU cores (minimum 1).
    pub num_threads: Option<usize>,
}

impl IndexingConfig {
    /// Number of catalogs parsed at the same time.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.num_threads.unwrap_or_else(|| (num_cpus::get() * 4 / 5).max(1))
    }
}

impl LintSettings {
    /// Rule toggles for the XLIFF path.
    #[must_use]
    pub const fn rule_options(&self) -> RuleOptions {
        RuleOptions { check_equal_to_key: self.check_equal_to_key }
    }

    /// Collects every problem instead of stopping at the first one.
    ///
    /// # Errors
    /// - Required pattern list is empty
    /// - Invalid glob pattern
    /// - Empty language code
    /// - Zero thread count
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.xliff_patterns.is_empty() && self.string_catalog_patterns.is_empty() {
            errors.push(ValidationError::new(
                "xliffPatterns/stringCatalogPatterns",
                "At least one pattern is required. Example: [\"**/*.xcstrings\"]",
            ));
        }

        for (field, patterns) in [
            ("xliffPatterns", &self.xliff_patterns),
            ("stringCatalogPatterns", &self.string_catalog_patterns),
            ("excludePatterns", &self.exclude_patterns),
        ] {
            for (index, pattern) in patterns.iter().enumerate() {
                if let Err(e) = globset::Glob::new(pattern) {
                    errors.push(ValidationError::new(
                        format!("{field}[{index}]"),
                        format!("Invalid glob pattern '{pattern}': {e}"),
                    ));
                }
            }
        }

        if let Some(languages) = &self.languages {
            if languages.is_empty() {
                errors.push(ValidationError::new(
                    "languages",
                    "At least one language is required, or remove this field to check every language",
                ));
            }
            for (index, language) in languages.iter().enumerate() {
                if language.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("languages[{index}]"),
                        "The language code cannot be empty. Example: \"es\"",
                    ));
                }
            }
        }

        if self.indexing.num_threads == Some(0) {
            errors.push(ValidationError::new(
                "indexing.numThreads",
                "The thread count must be at least 1, or remove this field to use the default",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            check_equal_to_key: true,
            languages: None,
            xliff_patterns: vec!["**/*.xcloc/Localized Contents/*.xliff".to_string()],
            string_catalog_patterns: vec!["**/*.xcstrings".to_string()],
            exclude_patterns: vec![".build/**".to_string(), "**/DerivedData/**".to_string()],
            report_format: ReportFormat::default(),
            indexing: IndexingConfig::default(),
        }
    }
}
