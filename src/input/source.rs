//! Source file input definitions.

use std::path::Path;

use crate::types::StringTable;

/// A candidate file under the scan directory, read in full.
///
/// `relative_path` is both the display name in progress logs and the
/// prefix of every table key built from this file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// プロジェクトルートからの相対パス (`/` 区切り)
    pub relative_path: String,
    pub text: String,
    pub language: ProgrammingLanguage,
}

impl SourceFile {
    /// パスの拡張子から言語を決めて作成する
    ///
    /// Returns `None` when no grammar handles the extension.
    #[must_use]
    pub fn new(relative_path: impl Into<String>, text: impl Into<String>) -> Option<Self> {
        let relative_path = relative_path.into();
        let language = ProgrammingLanguage::from_path(&relative_path)?;
        Some(Self { relative_path, text: text.into(), language })
    }

    /// `"<relative path> | <property>"`
    #[must_use]
    pub fn entry_key(&self, property: &str) -> String {
        StringTable::key_for(&self.relative_path, property)
    }
}

/// Grammar used to parse a source file.
///
/// JSX shares the JavaScript grammar; TSX needs its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammingLanguage {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl ProgrammingLanguage {
    /// 拡張子から判定 (`.mjs`/`.cjs` などのモジュール形式も含む)
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = Path::new(path).extension()?.to_str()?;
        match extension {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    #[must_use]
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}
