//! Indexer type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;
use crate::syntax::AnalyzerError;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Error while walking the scanned directory
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),
    /// Error when failing to read a file
    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Invalid include patterns
    #[error(transparent)]
    Pattern(#[from] MatcherError),
    /// A candidate file has an extension no parser is configured for
    #[error("No parser for source file {0}")]
    UnsupportedLanguage(String),
    /// Error while extracting `UIStrings` from a file
    #[error("{path}: {source}")]
    Analyze {
        path: String,
        #[source]
        source: AnalyzerError,
    },
}
