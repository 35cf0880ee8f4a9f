//! Walks the source tree and collects every `UIStrings` table into one [`StringTable`].
use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use crate::config::{
    CollectorSettings,
    FileMatcher,
};
use crate::indexer::types::IndexerError;
use crate::input::source::SourceFile;
use crate::syntax::analyze_source;
use crate::types::{
    MessageEntry,
    StringTable,
};

/// Collects `UIStrings` from the files under a project root.
#[derive(Debug, Clone)]
pub struct StringCollector {
    matcher: FileMatcher,
    /// コメントがないプロパティ用の説明
    default_descriptions: HashMap<String, String>,
}

impl StringCollector {
    /// 新しいコレクターを作成
    ///
    /// # Errors
    /// `includePatterns` に不正なパターンがある場合
    pub fn new(project_root: PathBuf, settings: &CollectorSettings) -> Result<Self, IndexerError> {
        Ok(Self {
            matcher: FileMatcher::new(project_root, settings)?,
            default_descriptions: settings.default_descriptions.clone(),
        })
    }

    /// `scan_dir` 以下を深さ優先で走査して文字列テーブルを作る
    ///
    /// Entries of a directory are visited in file name order so that the
    /// resulting table (and the files written from it) is stable across runs.
    ///
    /// # Errors
    /// 最初に発生したエラーで中断する（部分的な結果は返さない）
    pub fn collect(&self, scan_dir: &Path) -> Result<StringTable, IndexerError> {
        tracing::debug!(scan_dir = %scan_dir.display(), "Collecting UIStrings");
        let mut table = StringTable::new();

        let matcher = self.matcher.clone();
        let walker = WalkBuilder::new(scan_dir)
            // 除外は ignorePathComponents のみで判定する
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            // ディレクトリごと除外するので、配下には降りない
            .filter_entry(move |entry| !matcher.is_ignored(entry.path()))
            .build();

        for result in walker {
            let entry = result?;

            // ファイルのみを対象
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let Some(relative_path) = self.matcher.relative_path(path) else {
                continue;
            };
            if !self.matcher.is_candidate_relative(&relative_path) {
                continue;
            }

            self.collect_file(path, relative_path, &mut table)?;
        }

        Ok(table)
    }

    /// 単一ファイルの `UIStrings` をテーブルに追加
    fn collect_file(
        &self,
        path: &Path,
        relative_path: String,
        table: &mut StringTable,
    ) -> Result<(), IndexerError> {
        tracing::info!("Collecting from {relative_path}");

        let text = std::fs::read_to_string(path)
            .map_err(|source| IndexerError::Read { path: path.to_path_buf(), source })?;
        let file = SourceFile::new(relative_path.clone(), text)
            .ok_or_else(|| IndexerError::UnsupportedLanguage(relative_path))?;

        let strings = analyze_source(&file, &self.default_descriptions).map_err(|source| {
            IndexerError::Analyze { path: file.relative_path.clone(), source }
        })?;

        for string in strings.into_iter().flatten() {
            let key = file.entry_key(&string.key);
            let entry = MessageEntry { message: string.message, description: string.description };
            if table.insert(key, entry).is_some() {
                tracing::debug!(path = %file.relative_path, key = %string.key, "Duplicate property");
            }
        }

        Ok(())
    }
}
