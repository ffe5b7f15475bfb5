//! xcloc-lint
//!
//! Xcode のローカライズカタログ（`.xcloc` 内の XLIFF と `.xcstrings`）の翻訳漏れを検出する

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod input;
pub mod report;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use catalog::lint_workspace;
pub use types::{
    ErrorGroup,
    ErrorKind,
    TranslationError,
};
