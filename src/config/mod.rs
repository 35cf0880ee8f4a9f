//! Collector configuration.
/// Config file loader
mod loader;
/// Source path matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_settings,
};
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    CollectorSettings,
    ConfigError,
    FAILURE_TITLE_DESCRIPTION,
    ValidationError,
};
