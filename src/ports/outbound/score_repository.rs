use crate::scorecard::domain::{DependencyIdentity, Score};
use crate::shared::error::EvaluationError;
use async_trait::async_trait;

/// ScoreRepository port for fetching scorecard results
///
/// This port abstracts the reputation service (the OpenSSF Scorecard API).
///
/// # Async Support
/// Fetches run concurrently for distinct identities, so implementations
/// must be `Send + Sync`.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Fetches the score of one repository
    ///
    /// # Errors
    /// - `EvaluationError::NoScore` if the service has no record
    /// - `EvaluationError::Fetch` on transport failure or unexpected status
    /// - `EvaluationError::Decode` if the response body is malformed
    async fn fetch_score(&self, identity: &DependencyIdentity) -> Result<Score, EvaluationError>;
}
