use crate::scorecard::domain::DependencyEvaluation;
use crate::shared::CancellationToken;
use async_trait::async_trait;

/// PolicyEvaluationPort - Inbound port for evaluating one dependency
///
/// Callers hand in a raw import path and get back every violation and error
/// the configured policies produce for it. Implementations are shared
/// between concurrent callers, hence `Send + Sync` and `&self`.
#[async_trait]
pub trait PolicyEvaluationPort: Send + Sync {
    /// Evaluates a dependency reference against all policies
    ///
    /// # Arguments
    /// * `reference` - Import path as written in source (e.g. `github.com/org/lib/sub`)
    /// * `cancel` - Token that aborts outstanding lookups and fetches
    ///
    /// # Returns
    /// A `DependencyEvaluation` with violations in policy order then rule
    /// order, and any resolution, fetch or configuration errors. This method
    /// does not fail as a whole; failures are carried inside the evaluation.
    async fn evaluate(&self, reference: &str, cancel: &CancellationToken) -> DependencyEvaluation;
}
