//! カタログファイルの探索

use std::path::Path;

use ignore::WalkBuilder;

use super::types::{
    CatalogError,
    CatalogFiles,
};
use crate::config::{
    CatalogKind,
    FileMatcher,
    LintSettings,
};

/// ルート以下の XLIFF と String Catalog を検索
///
/// `.gitignore` に従い、隠しディレクトリも走査する（`.xcloc` の出力先が隠しディレクトリの場合がある）。
///
/// # Errors
/// パターンのコンパイルに失敗した場合
pub fn find_catalog_files(
    root: &Path,
    settings: &LintSettings,
) -> Result<CatalogFiles, CatalogError> {
    tracing::debug!(root = %root.display(), "Searching catalog files");
    let matcher = FileMatcher::new(root.to_path_buf(), settings)?;
    let mut files = CatalogFiles::default();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        match matcher.classify(entry.path()) {
            Some(CatalogKind::Xliff) => files.xliff.push(entry.into_path()),
            Some(CatalogKind::StringCatalog) => files.string_catalogs.push(entry.into_path()),
            None => {}
        }
    }

    files.xliff.sort();
    files.string_catalogs.sort();
    if files.is_empty() {
        tracing::warn!(root = %root.display(), "No catalog files found");
    }
    tracing::debug!(
        xliff = files.xliff.len(),
        string_catalogs = files.string_catalogs.len(),
        "Found catalog files"
    );

    Ok(files)
}
