use crate::ports::outbound::RepoRootLookup;
use crate::scorecard::domain::DependencyIdentity;
use crate::shared::error::EvaluationError;
use crate::shared::{CancellationToken, SingleFlight};
use tracing::debug;

/// IdentityCache resolves import paths to repository identities, at most
/// once per distinct path.
///
/// Failed resolutions are remembered too: a path that could not be resolved
/// once is reported with the same error for the rest of the run.
pub struct IdentityCache<L: RepoRootLookup> {
    lookup: L,
    flights: SingleFlight<String, DependencyIdentity>,
}

impl<L: RepoRootLookup> IdentityCache<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            flights: SingleFlight::new(),
        }
    }

    /// Resolves `reference` (e.g. `github.com/org/repo/sub/pkg`) to the
    /// identity of the repository that hosts it.
    ///
    /// # Errors
    /// - `EvaluationError::Resolution` if the lookup fails or its answer
    ///   cannot be turned into an identity
    /// - `EvaluationError::Cancelled` if `cancel` fires first
    pub async fn resolve(
        &self,
        reference: &str,
        cancel: &CancellationToken,
    ) -> Result<DependencyIdentity, EvaluationError> {
        self.flights
            .get_or_compute(&reference.to_string(), cancel, || async {
                debug!(reference, "resolving repository root");
                let repo_root = self.lookup.lookup(reference).await.map_err(|e| {
                    EvaluationError::Resolution {
                        reference: reference.to_string(),
                        reason: format!("{:#}", e),
                    }
                })?;
                DependencyIdentity::from_repo_root(&repo_root.repo_url, &repo_root.root).map_err(|e| {
                    EvaluationError::Resolution {
                        reference: reference.to_string(),
                        reason: e.to_string(),
                    }
                })
            })
            .await
    }

    /// Number of distinct references seen (resolved, failed or pending).
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn lookup(&self) -> &L {
        &self.lookup
    }
}
