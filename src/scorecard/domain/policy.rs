/// Which score a rule reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTarget {
    /// The aggregate score of the repository.
    Overall,
    /// The score of the named check.
    Check(String),
}

impl RuleTarget {
    /// Maps an optional check name to a target; a missing or blank name
    /// means the overall score.
    pub fn from_check_name(check: Option<&str>) -> Self {
        match check.map(str::trim) {
            Some(name) if !name.is_empty() => RuleTarget::Check(name.to_string()),
            _ => RuleTarget::Overall,
        }
    }

    pub fn check_name(&self) -> Option<&str> {
        match self {
            RuleTarget::Overall => None,
            RuleTarget::Check(name) => Some(name),
        }
    }
}

/// Minimum-score rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    target: RuleTarget,
    minimum_score: f64,
}

impl Rule {
    pub fn new(target: RuleTarget, minimum_score: f64) -> Self {
        Self {
            target,
            minimum_score,
        }
    }

    pub fn overall(minimum_score: f64) -> Self {
        Self::new(RuleTarget::Overall, minimum_score)
    }

    pub fn check(name: impl Into<String>, minimum_score: f64) -> Self {
        Self::new(RuleTarget::Check(name.into()), minimum_score)
    }

    pub fn target(&self) -> &RuleTarget {
        &self.target
    }

    pub fn minimum_score(&self) -> f64 {
        self.minimum_score
    }
}

/// A named scope (include/exclude globs over module roots) and the rules
/// applied to dependencies inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    description: String,
    include: Vec<String>,
    exclude: Vec<String>,
    rules: Vec<Rule>,
}

impl Policy {
    pub fn new(description: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            description: description.into(),
            include: Vec::new(),
            exclude: Vec::new(),
            rules,
        }
    }

    pub fn with_include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
