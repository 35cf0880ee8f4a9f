//! Load Tree-sitter queries from files.

use std::sync::OnceLock;

use tree_sitter::Query;

use crate::input::source::ProgrammingLanguage;
use crate::syntax::analyzer::types::AnalyzerError;

/// Patterns matching every way a module can export `UIStrings`.
const EXPORTS_QUERY: &str = include_str!("../../../queries/exports.scm");

/// Compiled query, or the compile error message.
type CachedQuery = Result<Query, String>;

static JS_QUERY_CACHE: OnceLock<CachedQuery> = OnceLock::new();
static TS_QUERY_CACHE: OnceLock<CachedQuery> = OnceLock::new();
static TSX_QUERY_CACHE: OnceLock<CachedQuery> = OnceLock::new();

fn parse_exports_query(language: ProgrammingLanguage) -> CachedQuery {
    let tree_sitter_lang = language.tree_sitter_language();

    Query::new(&tree_sitter_lang, EXPORTS_QUERY).map_err(|e| {
        tracing::error!("Failed to parse exports query for {language:?}: {e:?}");
        e.to_string()
    })
}

/// Loads the cached exports query for a language. Queries are parsed once per language.
pub fn load_exports_query(language: ProgrammingLanguage) -> Result<&'static Query, AnalyzerError> {
    let cached = match language {
        ProgrammingLanguage::JavaScript | ProgrammingLanguage::Jsx => {
            JS_QUERY_CACHE.get_or_init(|| parse_exports_query(ProgrammingLanguage::JavaScript))
        }
        ProgrammingLanguage::TypeScript => {
            TS_QUERY_CACHE.get_or_init(|| parse_exports_query(ProgrammingLanguage::TypeScript))
        }
        ProgrammingLanguage::Tsx => {
            TSX_QUERY_CACHE.get_or_init(|| parse_exports_query(ProgrammingLanguage::Tsx))
        }
    };

    cached.as_ref().map_err(|message| AnalyzerError::PatternCompile(message.clone()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::javascript(ProgrammingLanguage::JavaScript)]
    #[case::jsx(ProgrammingLanguage::Jsx)]
    #[case::typescript(ProgrammingLanguage::TypeScript)]
    #[case::tsx(ProgrammingLanguage::Tsx)]
    fn test_exports_query_compiles(#[case] language: ProgrammingLanguage) {
        let query = load_exports_query(language)
            .unwrap_or_else(|e| panic!("exports query should compile for {language:?}: {e}"));

        assert!(query.capture_names().contains(&"ui_strings.export_name"));
    }
}
