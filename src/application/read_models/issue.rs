use std::fmt;

/// Whether an issue is a policy violation or a failure to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Violation,
    Error,
}

/// One reportable line, attributed to a source position.
///
/// File-level problems (unreadable file, invalid syntax) use line and
/// column 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_name: String,
    pub line: usize,
    pub column: usize,
    pub reason: String,
    pub kind: IssueKind,
}

impl Issue {
    pub fn violation(file_name: impl Into<String>, line: usize, column: usize, reason: impl Into<String>) -> Self {
        Self::new(file_name, line, column, reason, IssueKind::Violation)
    }

    pub fn error(file_name: impl Into<String>, line: usize, column: usize, reason: impl Into<String>) -> Self {
        Self::new(file_name, line, column, reason, IssueKind::Error)
    }

    fn new(
        file_name: impl Into<String>,
        line: usize,
        column: usize,
        reason: impl Into<String>,
        kind: IssueKind,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            line,
            column,
            reason: reason.into(),
            kind,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{} {}", self.file_name, self.line, self.column, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let issue = Issue::violation("cmd/main.go", 7, 2, "import of package \"x\" is blocked");
        assert_eq!(issue.to_string(), "cmd/main.go:7:2 import of package \"x\" is blocked");
        assert_eq!(issue.kind, IssueKind::Violation);
    }

    #[test]
    fn test_error_constructor() {
        let issue = Issue::error("main.go", 0, 0, "invalid syntax");
        assert_eq!(issue.kind, IssueKind::Error);
        assert_eq!(issue.to_string(), "main.go:0:0 invalid syntax");
    }
}
