//! Catalog inputs: raw bytes to translation units and findings.
/// Input error types
pub mod error;
/// File name to language derivation
pub mod language;
/// `.xcstrings` string catalog documents
pub mod string_catalog;
/// XLIFF translation-exchange documents
pub mod xliff;

pub use error::ParseError;
pub use language::language_from_path;
pub use string_catalog::{
    StringCatalog,
    parse_resource_document,
};
pub use xliff::{
    parse_xliff,
    parse_xliff_units,
    parse_xliff_with_options,
};
