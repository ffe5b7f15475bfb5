//! Report rendering.

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::types::{
    ErrorGroup,
    ErrorKind,
    TranslationError,
};

/// Which report to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ReportFormat {
    /// Multi-line report for people.
    #[default]
    Human,
    /// `warning:` lines picked up by Xcode's build log scanner.
    Compiler,
}

/// `Error: key "<key>" has <description> for languages (<languages>)`
#[must_use]
pub fn format_human(groups: &[ErrorGroup]) -> Vec<String> {
    groups
        .iter()
        .map(|group| {
            format!(
                "Error: key \"{}\" has {} for languages ({})",
                group.key,
                group.kind.description(),
                group.languages.join(",")
            )
        })
        .collect()
}

/// `warning:<slug>:<languages>:"<key>"`
#[must_use]
pub fn format_compiler(groups: &[ErrorGroup]) -> Vec<String> {
    groups
        .iter()
        .map(|group| {
            format!("warning:{}:{}:\"{}\"", group.kind.slug(), group.languages.join(","), group.key)
        })
        .collect()
}

/// Finding counts for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    /// Language code.
    pub language: String,
    /// Findings of every kind.
    pub total: usize,
    /// Count per kind, in [`ErrorKind::ALL`] order.
    pub by_kind: [usize; 3],
}

impl LanguageSummary {
    /// Count of findings of `kind`.
    #[must_use]
    pub fn count(&self, kind: ErrorKind) -> usize {
        ErrorKind::ALL
            .iter()
            .zip(self.by_kind)
            .find_map(|(k, count)| (*k == kind).then_some(count))
            .unwrap_or_default()
    }
}

/// Count findings per language, languages sorted.
#[must_use]
pub fn summarize_by_language(errors: &[TranslationError]) -> Vec<LanguageSummary> {
    let mut counts: BTreeMap<&str, [usize; 3]> = BTreeMap::new();

    for error in errors {
        let by_kind = counts.entry(error.language.as_str()).or_default();
        for (slot, kind) in by_kind.iter_mut().zip(ErrorKind::ALL) {
            if kind == error.kind {
                *slot += 1;
            }
        }
    }

    counts
        .into_iter()
        .map(|(language, by_kind)| LanguageSummary {
            language: language.to_string(),
            total: by_kind.iter().sum(),
            by_kind,
        })
        .collect()
}

/// `Language: <lang> - <total> errors (<n> empty translation, ...)`
#[must_use]
pub fn format_summary(summaries: &[LanguageSummary]) -> Vec<String> {
    summaries
        .iter()
        .map(|summary| {
            let counts = ErrorKind::ALL
                .iter()
                .map(|kind| format!("{} {}", summary.count(*kind), kind.description()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Language: {} - {} errors ({counts})", summary.language, summary.total)
        })
        .collect()
}

/// Render the full report for `format`.
///
/// The human report ends with the per-language summary; the compiler report
/// contains `warning:` lines only.
#[must_use]
pub fn render(
    format: ReportFormat,
    groups: &[ErrorGroup],
    errors: &[TranslationError],
) -> Vec<String> {
    match format {
        ReportFormat::Human => {
            let mut lines = format_human(groups);
            lines.extend(format_summary(&summarize_by_language(errors)));
            lines
        }
        ReportFormat::Compiler => format_compiler(groups),
    }
}
