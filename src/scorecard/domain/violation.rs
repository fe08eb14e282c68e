use crate::scorecard::domain::DependencyIdentity;
use crate::shared::error::EvaluationError;
use std::fmt;

/// A single rule failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    root: String,
    policy: String,
    score: f64,
    check: Option<String>,
    threshold: f64,
}

impl Violation {
    pub fn new(
        root: impl Into<String>,
        policy: impl Into<String>,
        score: f64,
        check: Option<String>,
        threshold: f64,
    ) -> Self {
        Self {
            root: root.into(),
            policy: policy.into(),
            score,
            check,
            threshold,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn policy(&self) -> &str {
        &self.policy
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn check(&self) -> Option<&str> {
        self.check.as_deref()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Human-readable description, e.g.
    /// `import of package "github.com/org/lib" is blocked: min score: score 5.00 is below threshold 7.00`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "import of package {:?} is blocked: {}: score {:.2}",
            self.root, self.policy, self.score
        )?;
        if let Some(check) = &self.check {
            write!(f, " for check {:?}", check)?;
        }
        write!(f, " is below threshold {:.2}", self.threshold)
    }
}

/// Everything one evaluation produced for one dependency reference.
///
/// Violations and errors are kept apart: an error (say, an invalid glob in
/// one policy) does not discard violations found by other policies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DependencyEvaluation {
    pub identity: Option<DependencyIdentity>,
    pub violations: Vec<Violation>,
    pub errors: Vec<EvaluationError>,
}

impl DependencyEvaluation {
    pub fn failed(error: EvaluationError) -> Self {
        Self {
            identity: None,
            violations: Vec::new(),
            errors: vec![error],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.errors.is_empty()
    }
}
