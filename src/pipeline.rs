//! One full collection run: collect, pseudo-localize, write.

use std::path::{
    Path,
    PathBuf,
};

use crate::config::CollectorSettings;
use crate::error::Error;
use crate::indexer::workspace::StringCollector;
use crate::locale::write_locale;
use crate::pseudo_locale::pseudo_localize;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 収集したメッセージ数
    pub entry_count: usize,
    pub default_locale_path: PathBuf,
    pub pseudo_locale_path: PathBuf,
}

/// Collects every `UIStrings` under `project_root` and writes both locale files.
///
/// Nothing is written when collection fails.
///
/// # Errors
/// 収集または書き込みに失敗した場合
pub fn run(project_root: &Path, settings: &CollectorSettings) -> Result<RunSummary, Error> {
    let collector = StringCollector::new(project_root.to_path_buf(), settings)?;
    let strings = collector.collect(&project_root.join(&settings.scan_dir))?;
    let pseudo_strings = pseudo_localize(&strings);
    tracing::info!("Collected!");

    let locales_dir = project_root.join(&settings.locales_dir);
    let default_locale_path = write_locale(&locales_dir, &settings.default_locale, &strings)?;
    let pseudo_locale_path = write_locale(&locales_dir, &settings.pseudo_locale, &pseudo_strings)?;
    tracing::info!("Written to disk!");

    Ok(RunSummary { entry_count: strings.len(), default_locale_path, pseudo_locale_path })
}
