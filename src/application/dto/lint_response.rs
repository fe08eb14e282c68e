use crate::application::read_models::{Issue, IssueKind};

/// LintResponse - Internal response DTO from the lint use case
#[derive(Debug, Clone, Default)]
pub struct LintResponse {
    /// Issues in file order, then import order
    pub issues: Vec<Issue>,
    /// Number of Go files found by the search
    pub files_checked: usize,
    /// Number of third-party imports evaluated (duplicates included)
    pub imports_checked: usize,
}

impl LintResponse {
    pub fn new(issues: Vec<Issue>, files_checked: usize, imports_checked: usize) -> Self {
        Self {
            issues,
            files_checked,
            imports_checked,
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.count(IssueKind::Violation)
    }

    pub fn error_count(&self) -> usize {
        self.count(IssueKind::Error)
    }

    fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let response = LintResponse::new(
            vec![
                Issue::error("a.go", 0, 0, "unable to read file"),
                Issue::violation("a.go", 3, 2, "blocked"),
                Issue::violation("b.go", 4, 2, "blocked"),
            ],
            2,
            5,
        );

        assert!(response.has_issues());
        assert_eq!(response.violation_count(), 2);
        assert_eq!(response.error_count(), 1);
    }

    #[test]
    fn test_empty_response() {
        assert!(!LintResponse::default().has_issues());
    }
}
