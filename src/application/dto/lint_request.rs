use std::path::PathBuf;

/// Evaluations kept in flight when nothing else is configured
pub const DEFAULT_CONCURRENCY: usize = 8;

/// LintRequest - Internal request DTO for the lint use case
#[derive(Debug, Clone)]
pub struct LintRequest {
    /// Directory that targets are relative to; `go.mod` is searched from here
    pub project_dir: PathBuf,
    /// Files, directories, or `dir/...` patterns. Empty means `./...`
    pub targets: Vec<String>,
    /// Skip `_test.go` files
    pub skip_tests: bool,
    /// Drop "no scorecard" errors instead of reporting them
    pub ignore_missing_scores: bool,
    /// Maximum number of dependency evaluations in flight
    pub concurrency: usize,
}

impl LintRequest {
    pub fn new(project_dir: PathBuf, targets: Vec<String>) -> Self {
        Self {
            project_dir,
            targets,
            skip_tests: false,
            ignore_missing_scores: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_skip_tests(mut self, skip_tests: bool) -> Self {
        self.skip_tests = skip_tests;
        self
    }

    pub fn with_ignore_missing_scores(mut self, ignore_missing_scores: bool) -> Self {
        self.ignore_missing_scores = ignore_missing_scores;
        self
    }

    /// Sets the evaluation concurrency; zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = LintRequest::new(PathBuf::from("."), vec![]);
        assert!(!request.skip_tests);
        assert!(!request.ignore_missing_scores);
        assert_eq!(request.concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let request = LintRequest::new(PathBuf::from("."), vec![]).with_concurrency(0);
        assert_eq!(request.concurrency, 1);
    }
}
