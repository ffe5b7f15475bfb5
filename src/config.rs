//! Lint settings: file loading, validation and catalog path matching.
/// Settings file loading and command-line overrides
mod loader;
/// Catalog file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    SettingsOverrides,
    load_settings,
};
pub use matcher::{
    CatalogKind,
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    IndexingConfig,
    LintSettings,
    ValidationError,
};
