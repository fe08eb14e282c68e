/// Reputation score for one repository: an overall value plus per-check values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Score {
    score: f64,
    checks: Vec<Check>,
}

impl Score {
    pub fn new(score: f64, checks: Vec<Check>) -> Self {
        Self { score, checks }
    }

    /// The aggregate score.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// First check with exactly this name.
    pub fn check(&self, name: &str) -> Option<&Check> {
        self.checks.iter().find(|check| check.name == name)
    }
}

/// A single named scorecard check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Check {
    name: String,
    score: f64,
    reason: String,
    details: Vec<String>,
    documentation: Documentation,
}

impl Check {
    pub fn new(name: impl Into<String>, score: f64, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            reason: reason.into(),
            details: Vec::new(),
            documentation: Documentation::default(),
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = documentation;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Documentation {
    pub short: String,
    pub url: String,
}
