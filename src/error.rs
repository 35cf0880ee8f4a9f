//! Crate-level error.

use thiserror::Error;

use crate::config::ConfigError;
use crate::indexer::types::IndexerError;
use crate::locale::LocaleError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Indexer(#[from] IndexerError),
    #[error(transparent)]
    Locale(#[from] LocaleError),
}
