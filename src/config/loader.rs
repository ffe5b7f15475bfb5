//! 設定ファイルの読み込みとコマンドライン引数による上書き

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    LintSettings,
};
use crate::report::ReportFormat;

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".xcloc-lint.json";

/// コマンドライン引数による設定の上書き
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// `--format`
    pub report_format: Option<ReportFormat>,
    /// `--no-equal-to-key`
    pub disable_equal_to_key: bool,
    /// `--language`（空の場合は上書きしない）
    pub languages: Vec<String>,
}

impl SettingsOverrides {
    /// 上書きを適用した設定を返す
    #[must_use]
    pub fn apply(self, mut settings: LintSettings) -> LintSettings {
        if let Some(format) = self.report_format {
            settings.report_format = format;
        }
        if self.disable_equal_to_key {
            settings.check_equal_to_key = false;
        }
        if !self.languages.is_empty() {
            settings.languages = Some(self.languages);
        }
        settings
    }
}

/// ルートの設定ファイルを読み込み、上書きを適用してから検証する
///
/// 設定ファイルがない場合はデフォルト値を使う。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - 上書き後の設定のバリデーションエラー
pub fn load_settings(
    root: &Path,
    overrides: SettingsOverrides,
) -> Result<LintSettings, ConfigError> {
    let settings = read_settings_file(&root.join(CONFIG_FILE_NAME))?.unwrap_or_default();
    let settings = overrides.apply(settings);

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!(?settings, "Settings loaded");

    Ok(settings)
}

/// 設定ファイルを読み込む。ファイルがなければ `None`
fn read_settings_file(path: &Path) -> Result<Option<LintSettings>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Configuration file not found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(path = %path.display(), "Loading configuration");
    Ok(Some(serde_json::from_str(&content)?))
}
