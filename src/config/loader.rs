//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    CollectorSettings,
    ConfigError,
};

/// Name of the optional configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = ".collect-strings.json";

/// プロジェクトルートから設定を読み込む
///
/// `.collect-strings.json` ファイルを探して読み込む
///
/// # Arguments
/// * `project_root` - プロジェクトのルートパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_project(
    project_root: &Path,
) -> Result<Option<CollectorSettings>, ConfigError> {
    let config_path = project_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: CollectorSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// 設定を読み込み、検証する
///
/// 設定ファイルがない場合はデフォルト設定を返す。
pub fn load_settings(project_root: &Path) -> Result<CollectorSettings, ConfigError> {
    let settings = load_from_project(project_root)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}
