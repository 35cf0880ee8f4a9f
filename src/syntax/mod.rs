pub mod analyzer;

use std::collections::HashMap;

pub use analyzer::types::{
    AnalyzerError,
    TextLocation,
    UiString,
};

use crate::input::source::SourceFile;

/// ソースファイルを解析して `UIStrings` のプロパティを抽出
///
/// `UIStrings` ブロックを持たないファイルは `Ok(None)`。
pub fn analyze_source(
    file: &SourceFile,
    default_descriptions: &HashMap<String, String>,
) -> Result<Option<Vec<UiString>>, AnalyzerError> {
    let strings =
        analyzer::extractor::extract_ui_strings(&file.text, file.language, default_descriptions)?;

    match &strings {
        Some(strings) => {
            tracing::debug!(path = %file.relative_path, count = strings.len(), "Found UIStrings");
        }
        None => tracing::debug!(path = %file.relative_path, "No UIStrings block"),
    }

    Ok(strings)
}
