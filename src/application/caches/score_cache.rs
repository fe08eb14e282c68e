use crate::ports::outbound::ScoreRepository;
use crate::scorecard::domain::{DependencyIdentity, Score};
use crate::shared::error::EvaluationError;
use crate::shared::{CancellationToken, SingleFlight};
use tracing::debug;

/// ScoreCache fetches each repository's score at most once per run.
///
/// Concurrent requests for one identity share a single fetch. Fetch errors
/// are kept and replayed like scores. A fetch abandoned through
/// cancellation leaves nothing behind.
pub struct ScoreCache<S: ScoreRepository> {
    repository: S,
    flights: SingleFlight<DependencyIdentity, Score>,
}

impl<S: ScoreRepository> ScoreCache<S> {
    pub fn new(repository: S) -> Self {
        Self {
            repository,
            flights: SingleFlight::new(),
        }
    }

    /// Returns the score for `identity`, fetching it on first use.
    ///
    /// # Errors
    /// Whatever the repository reported for this identity, or
    /// `EvaluationError::Cancelled` if `cancel` fires first.
    pub async fn get_score(
        &self,
        identity: &DependencyIdentity,
        cancel: &CancellationToken,
    ) -> Result<Score, EvaluationError> {
        self.flights
            .get_or_compute(identity, cancel, || async {
                debug!(%identity, "fetching scorecard");
                let outcome = self.repository.fetch_score(identity).await;
                if let Err(e) = &outcome {
                    debug!(%identity, error = %e, "scorecard fetch failed");
                }
                outcome
            })
            .await
    }

    /// Number of identities seen (fetched, failed or pending).
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn repository(&self) -> &S {
        &self.repository
    }
}
