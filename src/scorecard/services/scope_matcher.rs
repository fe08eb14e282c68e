use crate::scorecard::domain::Policy;
use crate::shared::error::EvaluationError;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// ScopeMatcher decides whether a policy applies to a module root.
///
/// Patterns are matched case-insensitively against the whole root. `*`, `?`
/// and character classes stay inside one `/`-separated segment; `**` spans
/// segments (`github.com/org/**` matches every root below `github.com/org`).
///
/// A policy with no include patterns covers every root; exclude patterns are
/// then subtracted.
#[derive(Debug, Clone)]
pub struct ScopeMatcher {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl ScopeMatcher {
    /// Compiles the include and exclude patterns of `policy`.
    ///
    /// # Errors
    /// Returns `EvaluationError::Config` naming the first pattern that is
    /// not a valid glob.
    pub fn compile(policy: &Policy) -> Result<Self, EvaluationError> {
        Ok(Self {
            include: build_glob_set(policy.include())?,
            exclude: build_glob_set(policy.exclude())?,
        })
    }

    /// Returns true if `root` is in scope.
    pub fn applies(&self, root: &str) -> bool {
        let included = self
            .include
            .as_ref()
            .map_or(true, |include| include.is_match(root));

        included
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(root))
    }
}

fn build_glob_set(patterns: &[String]) -> Result<Option<GlobSet>, EvaluationError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .map_err(|e| EvaluationError::Config {
                pattern: pattern.clone(),
                reason: e.kind().to_string(),
            })?;
        builder.add(glob);
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| EvaluationError::Config {
            pattern: patterns.join(", "),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorecard::domain::Rule;

    fn policy(include: &[&str], exclude: &[&str]) -> Policy {
        Policy::new("test", vec![Rule::overall(5.0)])
            .with_include(include.iter().map(|s| s.to_string()).collect())
            .with_exclude(exclude.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_no_patterns_applies_to_everything() {
        let matcher = ScopeMatcher::compile(&policy(&[], &[])).unwrap();
        assert!(matcher.applies("github.com/org/lib"));
        assert!(matcher.applies("gopkg.in/yaml.v3"));
    }

    #[test]
    fn test_include_limits_scope() {
        let matcher = ScopeMatcher::compile(&policy(&["github.com/org/*"], &[])).unwrap();
        assert!(matcher.applies("github.com/org/lib"));
        assert!(!matcher.applies("github.com/other/lib"));
    }

    #[test]
    fn test_exclude_only_removes_matching_roots() {
        let matcher = ScopeMatcher::compile(&policy(&[], &["github.com/org/*"])).unwrap();
        assert!(!matcher.applies("github.com/org/lib"));
        assert!(matcher.applies("github.com/other/lib"));
        assert!(matcher.applies("golang.org/x/mod"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let matcher =
            ScopeMatcher::compile(&policy(&["github.com/org/*"], &["github.com/org/legacy"])).unwrap();
        assert!(matcher.applies("github.com/org/lib"));
        assert!(!matcher.applies("github.com/org/legacy"));
    }

    #[test]
    fn test_any_include_pattern_is_enough() {
        let matcher =
            ScopeMatcher::compile(&policy(&["golang.org/x/*", "github.com/org/*"], &[])).unwrap();
        assert!(matcher.applies("golang.org/x/mod"));
        assert!(matcher.applies("github.com/org/lib"));
        assert!(!matcher.applies("gitlab.com/org/lib"));
    }

    #[test]
    fn test_single_star_does_not_cross_segments() {
        let matcher = ScopeMatcher::compile(&policy(&["github.com/*"], &[])).unwrap();
        assert!(!matcher.applies("github.com/org/lib"));
    }

    #[test]
    fn test_double_star_crosses_segments() {
        let matcher = ScopeMatcher::compile(&policy(&["github.com/**"], &[])).unwrap();
        assert!(matcher.applies("github.com/org/lib"));
        assert!(matcher.applies("github.com/org/group/lib"));
        assert!(!matcher.applies("gitlab.com/org/lib"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let matcher = ScopeMatcher::compile(&policy(&["github.com/BurntSushi/*"], &[])).unwrap();
        assert!(matcher.applies("github.com/burntsushi/toml"));
        assert!(matcher.applies("GitHub.com/BURNTSUSHI/toml"));
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let result = ScopeMatcher::compile(&policy(&["github.com/[org"], &[]));
        match result {
            Err(EvaluationError::Config { pattern, .. }) => assert_eq!(pattern, "github.com/[org"),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_exclude_pattern_is_config_error() {
        let result = ScopeMatcher::compile(&policy(&[], &["{unclosed"]));
        assert!(matches!(result, Err(EvaluationError::Config { .. })));
    }
}
