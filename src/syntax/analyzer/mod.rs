pub mod extractor;
pub(crate) mod literal;
pub mod query_loader;
pub mod types;
