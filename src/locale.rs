//! Locale file reading and writing.

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::types::StringTable;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Failed to access locale file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid locale JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `<locales_dir>/<locale>.json`
#[must_use]
pub fn locale_file_path(locales_dir: &Path, locale: &str) -> PathBuf {
    locales_dir.join(format!("{locale}.json"))
}

/// テーブルをロケールファイルに書き出す
///
/// Writes pretty JSON with two-space indentation and a trailing newline,
/// creating `locales_dir` when missing and replacing any existing file.
/// Returns the path written to.
///
/// # Errors
/// ディレクトリ作成・書き込み・シリアライズに失敗した場合
pub fn write_locale(
    locales_dir: &Path,
    locale: &str,
    table: &StringTable,
) -> Result<PathBuf, LocaleError> {
    let path = locale_file_path(locales_dir, locale);

    let mut content = serde_json::to_string_pretty(table)
        .map_err(|source| LocaleError::Json { path: path.clone(), source })?;
    content.push('\n');

    fs::create_dir_all(locales_dir)
        .map_err(|source| LocaleError::Io { path: locales_dir.to_path_buf(), source })?;
    fs::write(&path, content).map_err(|source| LocaleError::Io { path: path.clone(), source })?;

    tracing::debug!(path = %path.display(), entries = table.len(), "Wrote locale file");
    Ok(path)
}

/// ロケールファイルを読み込む
///
/// # Errors
/// ファイルが読めない、または JSON として不正な場合
pub fn read_locale(path: &Path) -> Result<StringTable, LocaleError> {
    let content = fs::read_to_string(path)
        .map_err(|source| LocaleError::Io { path: path.to_path_buf(), source })?;

    serde_json::from_str(&content)
        .map_err(|source| LocaleError::Json { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;
    use crate::types::MessageEntry;

    #[fixture]
    fn table() -> StringTable {
        [
            (
                "lighthouse-core/audits/https.js | title".to_string(),
                MessageEntry::new("Uses HTTPS").with_description("Title of the audit."),
            ),
            (
                "lighthouse-core/audits/https.js | displayValue".to_string(),
                MessageEntry::new("{itemCount, plural, =1 {1 insecure request found} other {# insecure requests found}}"),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn test_write_locale_format(table: StringTable) {
        let temp_dir = TempDir::new().unwrap();

        let path = write_locale(temp_dir.path(), "en-US", &table).unwrap();

        assert_that!(path, eq(&temp_dir.path().join("en-US.json")));
        let expected = r#"{
  "lighthouse-core/audits/https.js | title": {
    "message": "Uses HTTPS",
    "description": "Title of the audit."
  },
  "lighthouse-core/audits/https.js | displayValue": {
    "message": "{itemCount, plural, =1 {1 insecure request found} other {# insecure requests found}}"
  }
}
"#;
        assert_that!(fs::read_to_string(&path).unwrap(), eq(expected));
    }

    #[rstest]
    fn test_write_locale_creates_directory_and_overwrites(table: StringTable) {
        let temp_dir = TempDir::new().unwrap();
        let locales_dir = temp_dir.path().join("lib").join("locales");

        write_locale(&locales_dir, "en-XA", &StringTable::new()).unwrap();
        let path = write_locale(&locales_dir, "en-XA", &table).unwrap();

        assert_that!(read_locale(&path).unwrap(), eq(&table));
    }

    #[rstest]
    fn test_empty_table_is_an_empty_object() {
        let temp_dir = TempDir::new().unwrap();

        let path = write_locale(temp_dir.path(), "en-US", &StringTable::new()).unwrap();

        assert_that!(fs::read_to_string(path).unwrap(), eq("{}\n"));
    }

    #[rstest]
    fn test_round_trip_keeps_order(table: StringTable) {
        let temp_dir = TempDir::new().unwrap();

        let path = write_locale(temp_dir.path(), "en-US", &table).unwrap();
        let read_back = read_locale(&path).unwrap();

        let keys: Vec<&String> = read_back.keys().collect();
        let expected: Vec<&String> = table.keys().collect();
        assert_that!(keys, eq(&expected));
        assert_that!(read_back, eq(&table));
    }

    #[rstest]
    fn test_read_locale_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = read_locale(&temp_dir.path().join("fr.json"));

        assert!(matches!(result, Err(LocaleError::Io { .. })));
    }

    #[rstest]
    fn test_read_locale_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en-US.json");
        fs::write(&path, r#"{"a | b": {"description": "no message"}}"#).unwrap();

        let result = read_locale(&path);

        assert!(matches!(result, Err(LocaleError::Json { .. })));
    }
}
