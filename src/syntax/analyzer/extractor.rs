//! Extracts the `UIStrings` table of a source file using Tree-sitter.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::{
    Node,
    Parser,
    QueryCursor,
    StreamingIteratorMut,
    Tree,
};

use crate::input::source::ProgrammingLanguage;
use crate::syntax::analyzer::literal::evaluate_string;
use crate::syntax::analyzer::query_loader::load_exports_query;
use crate::syntax::analyzer::types::{
    AnalyzerError,
    CaptureName,
    TextLocation,
    UiString,
};

/// Name of the declaration holding the localizable strings.
pub const UI_STRINGS: &str = "UIStrings";

/// Prepended to the matched block so that it parses as a standalone declaration.
const DECLARATION_PREFIX: &str = "const ";

/// `UIStrings = { ... };` で、`};` だけの行で終わるブロック
static UI_STRINGS_BLOCK: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?m)\bUIStrings\s*=\s*\{[\s\S]*?^\};\r?\n"));

/// A `UIStrings` block found in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStringsBlock<'a> {
    /// Byte offset of the block in the file
    pub start: usize,
    /// Matched text, starting at `UIStrings` and ending after the closing `};` line
    pub text: &'a str,
}

/// Finds the `UIStrings = { ... };` block in a file, if there is one.
pub fn find_ui_strings_block(text: &str) -> Result<Option<UiStringsBlock<'_>>, AnalyzerError> {
    let pattern =
        UI_STRINGS_BLOCK.as_ref().map_err(|e| AnalyzerError::PatternCompile(e.to_string()))?;

    Ok(pattern.find(text).map(|m| UiStringsBlock { start: m.start(), text: m.as_str() }))
}

fn parse_source(source: &str, language: ProgrammingLanguage) -> Result<Tree, AnalyzerError> {
    let mut parser = Parser::new();
    parser.set_language(&language.tree_sitter_language()).map_err(AnalyzerError::LanguageSetup)?;
    parser.parse(source, None).ok_or(AnalyzerError::ParseFailed)
}

/// Returns true if the module exports `UIStrings` (ESM or CommonJS).
///
/// The whole file is parsed; Tree-sitter recovers from syntax errors, so
/// unrelated problems elsewhere in the file do not hide the export.
pub fn exports_ui_strings(
    text: &str,
    language: ProgrammingLanguage,
) -> Result<bool, AnalyzerError> {
    let tree = parse_source(text, language)?;
    let query = load_exports_query(language)?;
    let cap_names = query.capture_names();
    let source_bytes = text.as_bytes();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), source_bytes);

    while let Some(match_) = matches.next_mut() {
        for capture in match_.captures {
            let Some(Ok(CaptureName::ExportName)) =
                cap_names.get(capture.index as usize).map(|name| name.parse::<CaptureName>())
            else {
                continue;
            };
            if capture.node.utf8_text(source_bytes).is_ok_and(|name| name == UI_STRINGS) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Collects every node of the tree in pre-order (= source order).
fn preorder(root: Node<'_>) -> Vec<Node<'_>> {
    let mut nodes = Vec::new();
    let mut cursor = root.walk();

    loop {
        nodes.push(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return nodes;
            }
        }
    }
}

/// Strips the comment delimiters and a single leading `*`.
fn comment_text(raw: &str) -> String {
    let body = raw.strip_prefix("//").unwrap_or_else(|| {
        raw.strip_prefix("/*").map_or(raw, |inner| inner.strip_suffix("*/").unwrap_or(inner))
    });
    let trimmed = body.trim();
    trimmed.strip_prefix('*').unwrap_or(trimmed).trim().to_string()
}

/// Parsed `UIStrings` block together with where it sits in the original file.
struct Snippet<'a> {
    /// `const ` + block text
    source: String,
    block: UiStringsBlock<'a>,
    file_text: &'a str,
}

impl<'a> Snippet<'a> {
    fn new(file_text: &'a str, block: UiStringsBlock<'a>) -> Self {
        Self { source: format!("{DECLARATION_PREFIX}{}", block.text), block, file_text }
    }

    fn text(&self, node: Node<'_>) -> &str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Maps a byte offset in the snippet back to a location in the file.
    fn location(&self, snippet_offset: usize) -> TextLocation {
        let file_offset =
            self.block.start + snippet_offset.saturating_sub(DECLARATION_PREFIX.len());
        TextLocation::of_offset(self.file_text, file_offset)
    }
}

/// Finds the object literal assigned to `UIStrings`.
fn find_ui_strings_object<'tree>(
    root: Node<'tree>,
    snippet: &Snippet<'_>,
) -> Result<Node<'tree>, AnalyzerError> {
    let mut cursor = root.walk();
    let declarators = root
        .named_children(&mut cursor)
        .filter(|node| matches!(node.kind(), "lexical_declaration" | "variable_declaration"))
        .flat_map(|declaration| {
            let mut inner = declaration.walk();
            declaration.named_children(&mut inner).collect::<Vec<_>>()
        });

    for declarator in declarators {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let is_ui_strings = declarator
            .child_by_field_name("name")
            .is_some_and(|name| snippet.text(name) == UI_STRINGS);
        if !is_ui_strings {
            continue;
        }

        let value = declarator.child_by_field_name("value").ok_or(AnalyzerError::ParseFailed)?;
        if value.kind() != "object" {
            return Err(AnalyzerError::NotAnObject { kind: value.kind().to_string() });
        }
        return Ok(value);
    }

    Err(AnalyzerError::MissingDeclaration)
}

/// Returns the static name of a property key.
fn property_key(key: Node<'_>, snippet: &Snippet<'_>) -> Result<String, AnalyzerError> {
    match key.kind() {
        "property_identifier" | "number" => Ok(snippet.text(key).to_string()),
        "string" => evaluate_string(key, &snippet.source).map_err(|kind| {
            AnalyzerError::UnsupportedProperty { kind, location: snippet.location(key.start_byte()) }
        }),
        other => Err(AnalyzerError::UnsupportedProperty {
            kind: other.to_string(),
            location: snippet.location(key.start_byte()),
        }),
    }
}

/// Extracts the `UIStrings` properties of a source file.
///
/// Only the matched `UIStrings` block is parsed for the properties; the file
/// as a whole is only consulted for the export check.
///
/// # Arguments
/// * `text` - ファイル全体のテキスト
/// * `language` - パーサーの言語
/// * `default_descriptions` - コメントがないプロパティ用の説明（プロパティ名 → 説明）
///
/// # Returns
/// - `Ok(None)`: `UIStrings` ブロックがない
/// - `Ok(Some(strings))`: 宣言順のプロパティ
///
/// # Errors
/// Returns `AnalyzerError` if:
/// - the block exists but `UIStrings` is not exported
/// - the block is not valid syntax on its own
/// - a property has no static name or a value is not a static string
pub fn extract_ui_strings(
    text: &str,
    language: ProgrammingLanguage,
    default_descriptions: &HashMap<String, String>,
) -> Result<Option<Vec<UiString>>, AnalyzerError> {
    let Some(block) = find_ui_strings_block(text)? else {
        return Ok(None);
    };

    if !exports_ui_strings(text, language)? {
        return Err(AnalyzerError::NotExported);
    }

    let snippet = Snippet::new(text, block);
    let tree = parse_source(&snippet.source, language)?;
    let root = tree.root_node();
    let nodes = preorder(root);

    if root.has_error() {
        let error_offset = nodes
            .iter()
            .find(|node| node.is_error() || node.is_missing())
            .map_or(0, Node::start_byte);
        return Err(AnalyzerError::SyntaxError { location: snippet.location(error_offset) });
    }

    let comments: Vec<Node<'_>> =
        nodes.into_iter().filter(|node| node.kind() == "comment").collect();
    let object = find_ui_strings_object(root, &snippet)?;

    let mut strings = Vec::new();
    // 最初のプロパティは `{` の位置から
    let mut previous_end = object.start_byte();
    let mut cursor = object.walk();

    for property in object.named_children(&mut cursor) {
        match property.kind() {
            "comment" => continue,
            "pair" => {}
            other => {
                return Err(AnalyzerError::UnsupportedProperty {
                    kind: other.to_string(),
                    location: snippet.location(property.start_byte()),
                });
            }
        }

        let (Some(key_node), Some(value_node)) =
            (property.child_by_field_name("key"), property.child_by_field_name("value"))
        else {
            return Err(AnalyzerError::SyntaxError {
                location: snippet.location(property.start_byte()),
            });
        };

        let key = property_key(key_node, &snippet)?;
        let message = evaluate_string(value_node, &snippet.source)
            .map_err(|kind| AnalyzerError::UnsupportedValue { key: key.clone(), kind })?;

        // 前のプロパティの終わりより後ろ、キーの開始以前にあるコメント
        let description = comments
            .iter()
            .find(|comment| {
                comment.start_byte() > previous_end && comment.end_byte() <= key_node.start_byte()
            })
            .map(|comment| comment_text(snippet.text(*comment)))
            .or_else(|| default_descriptions.get(&key).cloned());

        previous_end = property.end_byte();
        strings.push(UiString { key, message, description });
    }

    Ok(Some(strings))
}
