use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Description used for `failureTitle` properties that carry no comment.
pub const FAILURE_TITLE_DESCRIPTION: &str =
    "Show to users as the title of the audit when it is in a failing state.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectorSettings {
    /// Directory scanned for `UIStrings`, relative to the project root.
    pub scan_dir: String,
    /// Directory the locale files are written to, relative to the project root.
    pub locales_dir: String,

    pub include_patterns: Vec<String>,
    /// Substrings that exclude a path (and everything below it) when present.
    pub ignore_path_components: Vec<String>,

    /// Fallback descriptions keyed by property name, used when a property has no comment.
    pub default_descriptions: HashMap<String, String>,

    pub default_locale: String,
    pub pseudo_locale: String,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            scan_dir: "lighthouse-core".to_string(),
            locales_dir: "lighthouse-core/lib/locales".to_string(),
            include_patterns: vec!["**/*.js".to_string()],
            ignore_path_components: [
                "/.git",
                "/scripts",
                "/node_modules",
                "/renderer",
                "/test/",
                "-test.js",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            default_descriptions: HashMap::from([(
                "failureTitle".to_string(),
                FAILURE_TITLE_DESCRIPTION.to_string(),
            )]),
            default_locale: "en-US".to_string(),
            pseudo_locale: "en-XA".to_string(),
        }
    }
}

impl CollectorSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Both locales resolve to the same file
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.scan_dir.is_empty() {
            errors.push(ValidationError::new(
                "scanDir",
                "The directory cannot be empty. Use \".\" to scan the whole project",
            ));
        }

        if self.locales_dir.is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Example: \"lib/locales\"",
            ));
        }

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "includePatterns",
                "At least one pattern is required. Example: [\"**/*.js\"]",
            ));
        }

        for (index, pattern) in self.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, component) in self.ignore_path_components.iter().enumerate() {
            if component.is_empty() {
                errors.push(ValidationError::new(
                    format!("ignorePathComponents[{index}]"),
                    "An empty component would ignore every path. Remove this entry",
                ));
            }
        }

        for (field, locale) in
            [("defaultLocale", &self.default_locale), ("pseudoLocale", &self.pseudo_locale)]
        {
            if locale.is_empty() {
                errors.push(ValidationError::new(
                    field,
                    "The locale cannot be empty. Example: \"en-US\"",
                ));
            }
        }

        if !self.default_locale.is_empty() && self.default_locale == self.pseudo_locale {
            errors.push(ValidationError::new(
                "defaultLocale/pseudoLocale",
                format!(
                    "Both locales are '{}', so the pseudo-locale would overwrite the default one",
                    self.default_locale
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = CollectorSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: CollectorSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings, eq(&CollectorSettings::default()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"scanDir": "src", "defaultDescriptions": {"title": "Heading"}}"#;

        let settings: CollectorSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.scan_dir, eq("src"));
        assert_that!(settings.locales_dir, eq("lighthouse-core/lib/locales"));
        assert_that!(settings.default_descriptions.get("title"), some(eq(&"Heading".to_string())));
        // 明示的に指定した場合はデフォルトを置き換える
        assert_that!(settings.default_descriptions.get("failureTitle"), none());
    }

    #[rstest]
    fn default_descriptions_cover_failure_title() {
        let settings = CollectorSettings::default();

        assert_that!(
            settings.default_descriptions.get("failureTitle"),
            some(eq(&FAILURE_TITLE_DESCRIPTION.to_string()))
        );
    }

    #[rstest]
    #[case::empty_scan_dir(r#"{"scanDir": ""}"#, "scanDir")]
    #[case::empty_locales_dir(r#"{"localesDir": ""}"#, "localesDir")]
    #[case::no_include_patterns(r#"{"includePatterns": []}"#, "includePatterns")]
    #[case::invalid_glob(r#"{"includePatterns": ["**/*.{js"]}"#, "includePatterns[0]")]
    #[case::empty_ignore_component(
        r#"{"ignorePathComponents": ["/.git", ""]}"#,
        "ignorePathComponents[1]"
    )]
    #[case::empty_pseudo_locale(r#"{"pseudoLocale": ""}"#, "pseudoLocale")]
    #[case::same_locales(r#"{"pseudoLocale": "en-US"}"#, "defaultLocale/pseudoLocale")]
    fn validate_rejects(#[case] json: &str, #[case] field_path: &str) {
        let settings: CollectorSettings = serde_json::from_str(json).unwrap();

        let errors = settings.validate().unwrap_err();

        assert_that!(errors, elements_are![field!(ValidationError.field_path, eq(field_path))]);
    }

    #[rstest]
    fn validation_errors_are_numbered() {
        let settings: CollectorSettings =
            serde_json::from_str(r#"{"scanDir": "", "includePatterns": []}"#).unwrap();

        let error = ConfigError::ValidationErrors(settings.validate().unwrap_err());
        let error_message = error.to_string();

        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. scanDir"));
        assert_that!(error_message, contains_substring("2. includePatterns"));
    }
}
