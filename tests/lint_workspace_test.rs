//! Lints whole exported projects laid out the way Xcode writes them.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use googletest::prelude::*;
use tempfile::TempDir;
use xcloc_lint::analyzer::aggregate;
use xcloc_lint::catalog::CatalogError;
use xcloc_lint::config::{
    CONFIG_FILE_NAME,
    LintSettings,
    SettingsOverrides,
    load_settings,
};
use xcloc_lint::report::{
    ReportFormat,
    render,
};
use xcloc_lint::{
    ErrorKind,
    TranslationError,
    lint_workspace,
};

/// `(key, target, state)`; a `None` target leaves the `<target>` element out.
type Unit<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

fn xliff_file(original: &str, language: &str, units: &[Unit<'_>]) -> String {
    let body: String = units
        .iter()
        .map(|(key, target, state)| {
            let target = target.map_or_else(String::new, |text| {
                let state = state.map(|s| format!(" state=\"{s}\"")).unwrap_or_default();
                format!("\n          <target{state}>{text}</target>")
            });
            format!(
                "\n      <trans-unit id=\"{key}\" xml:space=\"preserve\">\n          <source>{key}</source>{target}\n          <note/>\n      </trans-unit>"
            )
        })
        .collect();

    format!(
        r#"  <file original="{original}" source-language="en" target-language="{language}" datatype="plaintext">
    <header>
      <tool tool-id="com.apple.dt.xcode" tool-name="Xcode" tool-version="16.2" build-num="16C5032a"/>
    </header>
    <body>{body}
    </body>
  </file>
"#
    )
}

fn xliff_document(files: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<xliff xmlns=\"urn:oasis:names:tc:xliff:document:1.2\" version=\"1.2\">\n{}</xliff>\n",
        files.concat()
    )
}

fn write_export(root: &Path, language: &str, document: &str) {
    let dir = root.join(format!("export/{language}.xcloc/Localized Contents"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{language}.xliff")), document).unwrap();
    fs::write(root.join(format!("export/{language}.xcloc/contents.json")), "{}").unwrap();
}

const INFO_PLIST: &str = "App/en.lproj/InfoPlist.strings";
const LOCALIZABLE: &str = "App/Localizable.xcstrings";

/// Development language export of a project whose catalog was never edited.
fn untranslated_en() -> String {
    xliff_document(&[
        xliff_file(
            INFO_PLIST,
            "en",
            &[
                ("CFBundleName", Some("App"), Some("new")),
                ("NSHumanReadableCopyright", Some(""), Some("new")),
            ],
        ),
        xliff_file(
            LOCALIZABLE,
            "en",
            &[
                ("Empty translation", Some("Empty translation"), Some("new")),
                ("Hello, world!", Some("Hola, mundo!"), Some("translated")),
                ("Missing translation", Some("Missing translation"), Some("new")),
            ],
        ),
    ])
}

fn sorted_by_language_and_key(mut errors: Vec<TranslationError>) -> Vec<TranslationError> {
    errors.sort_by(|a, b| (&a.language, &a.key).cmp(&(&b.language, &b.key)));
    errors
}

#[tokio::test]
async fn test_untranslated_project() {
    let temp_dir = TempDir::new().unwrap();
    write_export(temp_dir.path(), "en", &untranslated_en());

    let outcome = lint_workspace(temp_dir.path(), &LintSettings::default()).await.unwrap();

    assert_that!(outcome.failures, is_empty());
    assert_eq!(
        outcome.errors,
        vec![
            TranslationError::new("en", "CFBundleName", ErrorKind::NotYetLocalized),
            TranslationError::new("en", "NSHumanReadableCopyright", ErrorKind::Empty),
            TranslationError::new("en", "Empty translation", ErrorKind::EqualToKey),
            TranslationError::new("en", "Missing translation", ErrorKind::EqualToKey),
        ]
    );
}

#[tokio::test]
async fn test_two_language_project() {
    let temp_dir = TempDir::new().unwrap();
    let keys = [
        "Empty translation",
        "Hello, world!",
        "Missing translation",
        "Not compiled translation",
        "nsloc1",
    ];
    let en = xliff_document(&[
        xliff_file(
            INFO_PLIST,
            "en",
            &[
                ("CFBundleName", Some("App"), Some("new")),
                ("NSHumanReadableCopyright", Some(""), Some("new")),
            ],
        ),
        xliff_file(
            LOCALIZABLE,
            "en",
            &[
                ("Empty translation", Some("Empty translation"), Some("translated")),
                ("Hello, world!", Some("Hello, world!"), Some("translated")),
                ("Missing translation", Some("Missing translation"), Some("translated")),
                ("Not compiled translation", Some(""), Some("new")),
                ("nsloc1", Some(""), Some("new")),
            ],
        ),
    ]);
    let es_localizable: Vec<Unit<'_>> = keys.iter().map(|key| (*key, None, None)).collect();
    let es = xliff_document(&[
        xliff_file(
            INFO_PLIST,
            "es",
            &[("CFBundleName", None, None), ("NSHumanReadableCopyright", None, None)],
        ),
        xliff_file(LOCALIZABLE, "es", &es_localizable),
    ]);
    write_export(temp_dir.path(), "en", &en);
    write_export(temp_dir.path(), "es", &es);

    let outcome = lint_workspace(temp_dir.path(), &LintSettings::default()).await.unwrap();

    let mut expected = vec![
        TranslationError::new("en", "CFBundleName", ErrorKind::NotYetLocalized),
        TranslationError::new("en", "Empty translation", ErrorKind::EqualToKey),
        TranslationError::new("en", "Hello, world!", ErrorKind::EqualToKey),
        TranslationError::new("en", "Missing translation", ErrorKind::EqualToKey),
        TranslationError::new("en", "NSHumanReadableCopyright", ErrorKind::Empty),
        TranslationError::new("en", "Not compiled translation", ErrorKind::Empty),
        TranslationError::new("en", "nsloc1", ErrorKind::Empty),
        TranslationError::new("es", "CFBundleName", ErrorKind::Empty),
        TranslationError::new("es", "NSHumanReadableCopyright", ErrorKind::Empty),
    ];
    expected.extend(keys.iter().map(|key| TranslationError::new("es", *key, ErrorKind::Empty)));
    assert_that!(outcome.failures, is_empty());
    assert_eq!(sorted_by_language_and_key(outcome.errors), sorted_by_language_and_key(expected));
}

#[tokio::test]
async fn test_compiler_report_groups_languages() {
    let temp_dir = TempDir::new().unwrap();
    let units: &[Unit<'_>] =
        &[("Greeting", Some(""), None), ("Hello, world!", Some("Hello, world!"), None)];
    write_export(temp_dir.path(), "es", &xliff_document(&[xliff_file(LOCALIZABLE, "es", units)]));
    write_export(temp_dir.path(), "en", &xliff_document(&[xliff_file(LOCALIZABLE, "en", units)]));

    let outcome = lint_workspace(temp_dir.path(), &LintSettings::default()).await.unwrap();
    let groups = aggregate(outcome.errors.clone());

    assert_that!(
        render(ReportFormat::Compiler, &groups, &outcome.errors),
        elements_are![
            eq("warning:empty_translation:en,es:\"Greeting\""),
            eq("warning:content_equal_to_key:en,es:\"Hello, world!\""),
        ]
    );
}

#[tokio::test]
async fn test_settings_file_disables_equal_to_key() {
    let temp_dir = TempDir::new().unwrap();
    write_export(temp_dir.path(), "en", &untranslated_en());
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        r#"{"checkEqualToKey": false, "reportFormat": "compiler"}"#,
    )
    .unwrap();

    let settings = load_settings(temp_dir.path(), SettingsOverrides::default()).unwrap();
    let outcome = lint_workspace(temp_dir.path(), &settings).await.unwrap();

    assert_that!(settings.report_format, eq(ReportFormat::Compiler));
    assert_that!(
        outcome.errors,
        each(field!(TranslationError.kind, not(eq(&ErrorKind::EqualToKey))))
    );
    assert_eq!(
        outcome.errors,
        vec![
            TranslationError::new("en", "CFBundleName", ErrorKind::NotYetLocalized),
            TranslationError::new("en", "NSHumanReadableCopyright", ErrorKind::Empty),
            TranslationError::new("en", "Empty translation", ErrorKind::NotYetLocalized),
            TranslationError::new("en", "Missing translation", ErrorKind::NotYetLocalized),
        ]
    );
}

#[tokio::test]
async fn test_string_catalog_beside_exports() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = serde_json::json!({
        "sourceLanguage": "en",
        "strings": {
            "Hello, world!": {
                "localizations": {
                    "es": { "stringUnit": { "state": "translated", "value": "¡Hola, mundo!" } }
                }
            },
            "Missing translation": {},
        },
        "version": "1.0",
    });
    fs::create_dir_all(temp_dir.path().join("App")).unwrap();
    fs::write(temp_dir.path().join(LOCALIZABLE), catalog.to_string()).unwrap();

    let outcome = lint_workspace(temp_dir.path(), &LintSettings::default()).await.unwrap();

    assert_eq!(
        outcome.errors,
        vec![
            TranslationError::new("en", "Hello, world!", ErrorKind::Empty),
            TranslationError::new("en", "Missing translation", ErrorKind::Empty),
            TranslationError::new("es", "Missing translation", ErrorKind::Empty),
        ]
    );
}

#[tokio::test]
async fn test_truncated_export_is_a_failure() {
    let temp_dir = TempDir::new().unwrap();
    let document = untranslated_en();
    let truncated = &document[..document.len() / 2];
    write_export(temp_dir.path(), "en", truncated);

    let outcome = lint_workspace(temp_dir.path(), &LintSettings::default()).await.unwrap();

    assert_that!(outcome.failures, len(eq(1)));
    assert!(matches!(outcome.failures[0], CatalogError::Parse { .. }));
}

#[tokio::test]
async fn test_invalid_pattern_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let settings = LintSettings { xliff_patterns: vec!["[".to_string()], ..LintSettings::default() };

    let result = lint_workspace(temp_dir.path(), &settings).await;

    assert!(matches!(result, Err(CatalogError::Pattern(_))));
}

#[tokio::test]
async fn test_zero_byte_export_is_a_failure() {
    let temp_dir = TempDir::new().unwrap();
    write_export(temp_dir.path(), "en", &untranslated_en());
    write_export(temp_dir.path(), "es", "");

    let outcome = lint_workspace(temp_dir.path(), &LintSettings::default()).await.unwrap();

    assert_that!(outcome.errors, len(eq(4)));
    assert_that!(outcome.failures, len(eq(1)));
    assert!(matches!(outcome.failures[0], CatalogError::Parse { .. }));
}
