//! Types for the analyzer module

use std::str::FromStr;

use thiserror::Error;

/// Tree-sitter クエリで使用するキャプチャ名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureName {
    /// エクスポートされた名前 (e.g., `export const UIStrings`, `module.exports = { UIStrings }`)
    ExportName,
}

impl CaptureName {
    /// クエリ内で使われる全キャプチャ
    const ALL: [Self; 1] = [Self::ExportName];

    /// Tree-sitter クエリで使用する文字列表現を取得
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExportName => "ui_strings.export_name",
        }
    }
}

/// 文字列から `CaptureName` への変換エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCaptureNameError;

impl FromStr for CaptureName {
    type Err = ParseCaptureNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|name| name.as_str() == s).ok_or(ParseCaptureNameError)
    }
}

/// One property of a `UIStrings` object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiString {
    /// Property name
    pub key: String,
    /// Evaluated value of the property
    pub message: String,
    /// Comment preceding the property, or the configured fallback
    pub description: Option<String>,
}

/// A 1-based line/column location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLocation {
    pub line: usize,
    pub column: usize,
}

impl TextLocation {
    /// Computes the location of `byte_offset` in `text`.
    ///
    /// The column counts characters, not bytes.
    #[must_use]
    pub fn of_offset(text: &str, byte_offset: usize) -> Self {
        let prefix = text.get(..byte_offset).unwrap_or(text);
        let line_start = prefix.rfind('\n').map_or(0, |index| index + 1);
        let line = prefix.matches('\n').count() + 1;
        let column = prefix.get(line_start..).map_or(0, |rest| rest.chars().count()) + 1;
        Self { line, column }
    }
}

impl std::fmt::Display for TextLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Defines errors that may occur during the analysis process
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Error when failing to set the language for the parser
    #[error("Failed to set language for parser: {0}")]
    LanguageSetup(#[from] tree_sitter::LanguageError),
    /// Error when the parser returns no tree at all
    #[error("Failed to parse source code")]
    ParseFailed,
    /// The isolated `UIStrings` declaration is not valid syntax on its own
    #[error("Syntax error in UIStrings declaration at {location}")]
    SyntaxError { location: TextLocation },
    /// Error when a bundled query or pattern does not compile
    #[error("Failed to compile pattern: {0}")]
    PatternCompile(String),
    /// The parsed block contains no `UIStrings` declarator
    #[error("UIStrings declaration not found in matched block")]
    MissingDeclaration,
    /// `UIStrings` is assigned something other than an object literal
    #[error("UIStrings must be assigned an object literal, found `{kind}`")]
    NotAnObject { kind: String },
    /// The file declares `UIStrings` but never exports it
    #[error("UIStrings defined but not exported")]
    NotExported,
    /// A property form that has no static name (spread, computed key, ...)
    #[error("Unsupported UIStrings property `{kind}` at {location}")]
    UnsupportedProperty { kind: String, location: TextLocation },
    /// A property value that is not a static string
    #[error("Unsupported message value for `{key}`: `{kind}` is not a string literal")]
    UnsupportedValue { key: String, kind: String },
}
