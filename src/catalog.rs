//! Catalog discovery and batch validation over a directory tree.

pub mod locator;
pub mod types;
pub mod validator;

pub use locator::find_catalog_files;
pub use types::{
    BatchOutcome,
    CatalogError,
    CatalogFiles,
};
pub use validator::{
    discover_languages,
    lint_workspace,
    validate_string_catalogs,
    validate_xliff_files,
};
