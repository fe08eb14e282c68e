use crate::scorecard::domain::{Policy, RuleTarget, Score, Violation};

/// RuleEvaluator tests a score against the rules of one policy.
///
/// Rules are evaluated in order. A rule aimed at a named check reads the
/// first check with that name; a check missing from the score counts as 0.
pub struct RuleEvaluator;

impl RuleEvaluator {
    /// Returns one violation per rule whose evaluated value is below its
    /// minimum, in rule order.
    pub fn evaluate(root: &str, policy: &Policy, score: &Score) -> Vec<Violation> {
        policy
            .rules()
            .iter()
            .filter_map(|rule| {
                let value = Self::evaluated_value(rule.target(), score);
                (value < rule.minimum_score()).then(|| {
                    Violation::new(
                        root,
                        policy.description(),
                        value,
                        rule.target().check_name().map(str::to_string),
                        rule.minimum_score(),
                    )
                })
            })
            .collect()
    }

    /// The value a rule target reads from a score.
    pub fn evaluated_value(target: &RuleTarget, score: &Score) -> f64 {
        match target {
            RuleTarget::Overall => score.score(),
            RuleTarget::Check(name) => score.check(name).map_or(0.0, |check| check.score()),
        }
    }
}
