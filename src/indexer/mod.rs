//! Source tree traversal.
pub mod types;
pub mod workspace;

pub use types::IndexerError;
pub use workspace::StringCollector;
