//! collect-strings
//!
//! ソースツリーから `UIStrings` を収集し、ロケールファイル (`en-US` / 擬似ロケール `en-XA`) を生成する

pub mod config;
pub mod error;
pub mod indexer;
pub mod input;
pub mod locale;
pub mod pipeline;
pub mod pseudo_locale;
pub mod syntax;
pub mod types;

pub use error::Error;
pub use pipeline::{
    RunSummary,
    run,
};
