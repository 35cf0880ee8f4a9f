//! Path matching for the source tree walk.

use std::path::{
    Component,
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::CollectorSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Decides which paths under the project root are skipped and which are collected from.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    project_root: PathBuf,
    include_set: GlobSet,
    ignore_components: Vec<String>,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(project_root: PathBuf, settings: &CollectorSettings) -> Result<Self, MatcherError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &settings.include_patterns {
            let glob = Glob::new(pattern).map_err(|source| {
                MatcherError::InvalidIncludePattern { pattern: pattern.clone(), source }
            })?;
            builder.add(glob);
        }

        Ok(Self {
            project_root,
            include_set: builder.build()?,
            ignore_components: settings.ignore_path_components.clone(),
        })
    }

    /// Returns the path relative to the project root with `/` separators.
    ///
    /// `None` when the path is not under the project root.
    #[must_use]
    pub fn relative_path(&self, absolute_path: &Path) -> Option<String> {
        let relative = absolute_path.strip_prefix(&self.project_root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Some(parts.join("/"))
    }

    /// Returns true if the path contains one of `ignorePathComponents`.
    ///
    /// Checked against `/<relative path>` so that markers such as `/scripts`
    /// also match a top-level directory.
    #[must_use]
    pub fn is_ignored_relative(&self, relative_path: &str) -> bool {
        let rooted = format!("/{relative_path}");
        self.ignore_components.iter().any(|component| rooted.contains(component.as_str()))
    }

    /// Returns true if the path is outside the project root or contains an ignored component.
    #[must_use]
    pub fn is_ignored(&self, absolute_path: &Path) -> bool {
        self.relative_path(absolute_path).is_none_or(|relative| self.is_ignored_relative(&relative))
    }

    /// Returns true if the path matches `includePatterns`.
    ///
    /// The path must be relative to the project root.
    #[must_use]
    pub fn is_candidate_relative(&self, relative_path: &str) -> bool {
        self.include_set.is_match(relative_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[fixture]
    fn matcher() -> FileMatcher {
        FileMatcher::new(PathBuf::from("/project"), &CollectorSettings::default()).unwrap()
    }

    #[rstest]
    #[case::audit("lighthouse-core/audits/metrics.js", false)]
    #[case::git_dir(".git/hooks/pre-commit.js", true)]
    #[case::scripts_dir("lighthouse-core/scripts/i18n/collect.js", true)]
    #[case::node_modules("lighthouse-core/node_modules/dep/index.js", true)]
    #[case::renderer("lighthouse-core/report/html/renderer/util.js", true)]
    #[case::test_dir("lighthouse-core/test/audits/metrics.js", true)]
    #[case::test_suffix("lighthouse-core/audits/metrics-test.js", true)]
    #[case::test_prefix_not_dir("lighthouse-core/testing/metrics.js", false)]
    #[case::git_prefixed_file("lighthouse-core/.gitkeep", true)]
    fn test_is_ignored_relative(
        matcher: FileMatcher,
        #[case] relative_path: &str,
        #[case] expected: bool,
    ) {
        assert_that!(matcher.is_ignored_relative(relative_path), eq(expected));
    }

    #[rstest]
    fn test_is_ignored_outside_root(matcher: FileMatcher) {
        assert_that!(matcher.is_ignored(Path::new("/elsewhere/audits/metrics.js")), eq(true));
        assert_that!(matcher.is_ignored(Path::new("/project/lighthouse-core/a.js")), eq(false));
    }

    #[rstest]
    fn test_relative_path(matcher: FileMatcher) {
        let relative = matcher.relative_path(Path::new("/project/lighthouse-core/audits/a.js"));

        assert_that!(relative, some(eq("lighthouse-core/audits/a.js")));
        assert_that!(matcher.relative_path(Path::new("/project")), some(eq("")));
    }

    #[rstest]
    #[case::js("lighthouse-core/audits/metrics.js", true)]
    #[case::top_level_js("metrics.js", true)]
    #[case::json("lighthouse-core/lib/locales/en-US.json", false)]
    #[case::ts("lighthouse-core/audits/metrics.ts", false)]
    #[case::no_extension("lighthouse-core/audits/README", false)]
    fn test_is_candidate_relative(
        matcher: FileMatcher,
        #[case] relative_path: &str,
        #[case] expected: bool,
    ) {
        assert_that!(matcher.is_candidate_relative(relative_path), eq(expected));
    }
}
