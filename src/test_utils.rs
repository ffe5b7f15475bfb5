//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される XLIFF / String Catalog のフィクスチャを提供します。
#![cfg(test)]

use std::fmt::Write as _;

/// テスト用の `<trans-unit>` 要素を作成する
///
/// 値はエスケープされずにそのまま埋め込まれる。
///
/// # Arguments
/// * `id` - キー（`id` 属性）
/// * `target` - 翻訳値。`None` の場合は `<target>` 要素を出力しない
/// * `state` - `<target>` の `state` 属性
pub(crate) fn trans_unit(id: &str, target: Option<&str>, state: Option<&str>) -> String {
    let mut unit = format!(
        "<trans-unit id=\"{id}\" xml:space=\"preserve\">\n        <source>{id}</source>\n"
    );
    if let Some(target) = target {
        let state = state.map(|s| format!(" state=\"{s}\"")).unwrap_or_default();
        let _ = writeln!(unit, "        <target{state}>{target}</target>");
    }
    unit.push_str("        <note/>\n      </trans-unit>");
    unit
}

/// Xcode のエクスポートと同じ構造の XLIFF 文書を作成する
pub(crate) fn xliff_document(units: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xliff xmlns="urn:oasis:names:tc:xliff:document:1.2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="1.2">
  <file original="App/Localizable.xcstrings" source-language="en" target-language="en" datatype="plaintext">
    <header>
      <tool tool-id="com.apple.dt.xcode" tool-name="Xcode" tool-version="16.2" build-num="16C5032a"/>
    </header>
    <body>
      {}
    </body>
  </file>
</xliff>
"#,
        units.join("\n      ")
    )
}

/// テスト用の String Catalog (`.xcstrings`) 文書を作成する
///
/// # Arguments
/// * `source_language` - `sourceLanguage`
/// * `strings` - `strings` フィールドの JSON
pub(crate) fn string_catalog(source_language: &str, strings: &serde_json::Value) -> String {
    serde_json::json!({
        "sourceLanguage": source_language,
        "strings": strings,
        "version": "1.0",
    })
    .to_string()
}
